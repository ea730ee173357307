//! Decides between compact and exploded rendering of composites.

use console::measure_text_width;

use crate::options::Options;
use crate::style::styled;

/// Joins already-rendered children between an open and close token.
///
/// The decision is driven by printable length: each child is measured with
/// escape sequences excluded ([`console::measure_text_width`]) plus two
/// columns for its separator. When pretty-printing is on and the total
/// exceeds `max_item_len`, children explode across lines indented one unit
/// deeper than the current depth, with the open token followed immediately
/// by a line break. Otherwise, and always when pretty-printing is off, the
/// children stay inline joined with `", "`: compactness wins whenever it
/// fits.
///
/// The open and close tokens render with the `"symbol"` style. Callers
/// short-circuit empty composites before reaching this function.
pub fn enclose(
    open: &str,
    close: &str,
    children: &[String],
    depth: usize,
    options: &Options,
) -> String {
    let total: usize = children
        .iter()
        .map(|child| measure_text_width(child) + 2)
        .sum();
    let open = styled(open, "symbol", options);
    let close = styled(close, "symbol", options);

    if options.pretty_print && total > options.max_item_len {
        let separator = format!("{}{}", options.newline, options.indent.repeat(depth + 1));
        let joiner = format!(",{separator}");
        format!("{open}{separator}{}{close}", children.join(&joiner))
    } else {
        format!("{open}{}{close}", children.join(", "))
    }
}

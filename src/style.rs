//! Applies named, ordered visual modifiers to text fragments.
//!
//! A style name resolves to an ordered list of modifier names through the
//! effective options; each modifier wraps the prior result, so
//! `["bold", "blue"]` yields blue-around-bold text. Modifier names resolve
//! to [`console::Style`] attributes; unknown names are identity transforms.
//!
//! Styling is forced on so output is identical on and off a TTY. Layout
//! decisions are immune to the added escape sequences because widths are
//! measured ANSI-aware (see the layout module).

use console::Style;

use crate::options::Options;

/// Renders `text` with the modifier list registered under `name`.
///
/// An unregistered style name leaves the text unchanged.
pub fn styled(text: &str, name: &str, options: &Options) -> String {
    let Some(modifiers) = options.styles.get(name) else {
        return text.to_string();
    };
    modifiers
        .iter()
        .fold(text.to_string(), |text, modifier| apply(&text, modifier))
}

fn apply(text: &str, modifier: &str) -> String {
    let style = match modifier {
        "bold" => Style::new().bold(),
        "dim" => Style::new().dim(),
        "italic" => Style::new().italic(),
        "underline" => Style::new().underlined(),
        "black" => Style::new().black(),
        "red" => Style::new().red(),
        "green" => Style::new().green(),
        "yellow" => Style::new().yellow(),
        "blue" => Style::new().blue(),
        "magenta" => Style::new().magenta(),
        "cyan" => Style::new().cyan(),
        "white" => Style::new().white(),
        "grey" | "gray" => Style::new().color256(8),
        _ => return text.to_string(),
    };
    style.force_styling(true).apply_to(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_style_is_identity() {
        let options = Options::defaults();
        assert_eq!(styled("x", "no-such-style", options), "x");
    }

    #[test]
    fn test_unknown_modifier_is_identity() {
        let mut options = Options::defaults().clone();
        options
            .styles
            .insert("odd".to_string(), vec!["sparkle".to_string()]);
        assert_eq!(styled("x", "odd", &options), "x");
    }

    #[test]
    fn test_modifiers_wrap_left_to_right() {
        let options = Options::defaults();
        // symbol is ["bold", "blue"]: blue wraps the bold text.
        let text = styled("{", "symbol", options);
        assert!(text.starts_with("\u{1b}[34m"));
        assert!(text.contains("\u{1b}[1m"));
        assert_eq!(console::strip_ansi_codes(&text), "{");
    }

    #[test]
    fn test_forced_styling_off_tty() {
        let options = Options::defaults();
        let text = styled("42", "number", options);
        assert!(text.contains("\u{1b}[33m"));
    }
}

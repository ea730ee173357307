//! Escaping for textual scalars.

/// Produces a safely printable form of a string.
///
/// One pass over the original characters: backslashes double, newlines
/// become the two-character literal `\n`, single quotes are escaped, and any
/// other control character in U+0001–U+001F becomes a backslash followed by
/// its three-digit octal code. Working on the original characters means
/// backslashes introduced by the other substitutions are never re-escaped.
///
/// Callers wrap the result in single quotes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\'' => out.push_str("\\'"),
            '\u{0001}'..='\u{001f}' => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

//! Prose → HTML and escaping helpers
//!
//! Prose fields (paragraphs, list items, previews, card content) go through `comrak`. Titles
//! never do: they are escaped and inserted as plain text, otherwise a title that was already
//! unescaped on the way in would be mangled by markdown rules on the way out.

use comrak::{markdown_to_html as comrak_to_html, ComrakOptions};

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // text pulled out of pages may contain angle brackets; keep them visible
    options.render.escape = true;
    options
}

/// Render a markdown snippet to HTML.
pub fn markdown_to_html(source: &str) -> String {
    comrak_to_html(source, &default_comrak_options())
}

/// Backslash-escape a markdown block marker at the start of every line.
///
/// Text recovered from a page is plain prose: a line that happens to start with `* `, `1. `,
/// `#` or `>` must render as that text, not as a list, heading or quote.
pub fn escape_block_markers(text: &str) -> String {
    text.split('\n')
        .map(escape_line_marker)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line_marker(line: &str) -> String {
    let indent = line.len() - line.trim_start().len();
    let (lead, rest) = line.split_at(indent);
    match block_marker_at(rest) {
        Some(at) => format!("{lead}{}\\{}", &rest[..at], &rest[at..]),
        None => line.to_string(),
    }
}

/// Byte offset of the character to escape when `line` opens a markdown block.
fn block_marker_at(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let first = *bytes.first()?;
    let ends_marker = |at: usize| matches!(bytes.get(at), None | Some(b' ' | b'\t'));

    match first {
        b'#' | b'>' => Some(0),
        b'*' | b'-' | b'+' if ends_marker(1) => Some(0),
        b'`' | b'~' if line.starts_with("```") || line.starts_with("~~~") => Some(0),
        b'*' | b'-' | b'_' | b'=' if is_rule(line, first) => Some(0),
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            let delimiter = matches!(bytes.get(digits), Some(b'.' | b')'));
            (digits <= 9 && delimiter && ends_marker(digits + 1)).then_some(digits)
        }
        _ => None,
    }
}

/// `---`, `***`, `___` or `===` runs, spaces allowed.
fn is_rule(line: &str, marker: u8) -> bool {
    line.bytes().all(|b| b == marker || b == b' ' || b == b'\t')
        && line.bytes().filter(|&b| b == marker).count() >= 2
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

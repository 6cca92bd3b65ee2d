// Text cleaner: strips formatting artifacts from raw lines.
//
// Documents arrive as plain text extracted from theses and reports, so lines
// carry table-of-contents debris: chapter numbers ("3.2.1 "), dot leaders
// with page numbers (" ..... 42") and bracketed annotations ("(see below)").
// Each rule only deletes characters, and the rules are applied until the line
// stops changing, so cleaning a clean line is a no-op.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace followed by a parenthesized group without a nested `(`.
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\([^(]*\)").expect("annotation pattern"));

/// Leading enumeration: digit groups separated by dots, optional final dot.
static ENUMERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)*\.?\s*").expect("enumeration pattern"));

/// Trailing dot leader or spacing, optionally followed by a page number.
static TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\.+|\s+)\s*[0-9]*$").expect("trailer pattern"));

/// Apply every rule once.
fn clean_once(line: &str) -> String {
    let line = line.trim();
    let line = ANNOTATION.replace_all(line, "");
    let line = ENUMERATION.replace(line.trim(), "");
    let line = TRAILER.replace(line.trim(), "");
    line.trim().to_string()
}

/// Clean a single line. Returns `None` when nothing is left.
pub fn clean_line(line: &str) -> Option<String> {
    let mut current = clean_once(line);
    loop {
        let next = clean_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    if current.is_empty() {
        None
    } else {
        Some(current)
    }
}

/// Lazily clean a sequence of lines, dropping the ones that end up empty.
///
/// Order is preserved and the input is consumed in a single pass.
pub fn clean_lines<I>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines.into_iter().filter_map(|line| clean_line(line.as_ref()))
}

/// Characters that end a line on their own. Form feeds separate pages in
/// text extracted from PDFs.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Split text on universal newline boundaries: `\r\n` and every character
/// in [`LINE_BREAKS`].
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(LINE_BREAKS))
}

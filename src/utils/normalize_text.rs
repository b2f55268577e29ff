/// Normalizes raw text into the lowercase, single-spaced, punctuation-free form the rest of
/// the pipeline operates on.
///
/// Every character that is neither a word character (letter, digit, underscore) nor whitespace
/// is deleted outright rather than replaced by a space, so an apostrophe or hyphen inside a
/// word joins its neighbors into one token (`"don't"` becomes `"dont"`, `"well-known"` becomes
/// `"wellknown"`). Whitespace runs of any kind, including line breaks, collapse to a single
/// space, and leading/trailing whitespace is dropped.
///
/// Deletion happens before the whitespace collapse, so a second pass over the output is a
/// no-op: `normalize_text(&normalize_text(text)) == normalize_text(&text)`.
///
/// # Example
/// ```
/// use phrase_sniffer::normalize_text;
///
/// let text = "This is a test!\nThis   is only a test.";
/// assert_eq!(normalize_text(text), "this is a test this is only a test");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

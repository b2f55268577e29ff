use crate::types::Token;
use crate::utils::normalize_text;

/// Tokenizer function to split a text document into individual word tokens.
///
/// The text is normalized first (see [`normalize_text`]), after which tokens are exactly the
/// maximal runs of word characters, in their order of appearance. The output never contains
/// empty tokens, no matter how the input spaces or punctuates its words.
///
/// Normalization is idempotent, so feeding already-normalized text through here yields the
/// same tokens as feeding the raw text.
///
/// # Example
/// ```
/// use phrase_sniffer::tokenize;
///
/// let tokens = tokenize("Don't panic -- keep calm.");
/// assert_eq!(tokens, vec!["dont", "panic", "keep", "calm"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    normalize_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

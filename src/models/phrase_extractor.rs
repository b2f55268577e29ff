use crate::models::Error;
use crate::types::{Phrase, Token};

/// Configuration for [`PhraseExtractor`].
#[derive(Debug, Clone)]
pub struct PhraseExtractorConfig {
    /// Number of words per phrase. Must be at least 1.
    pub phrase_word_count: usize,
}

/// Slides a fixed-width window over a token sequence, producing one phrase per position.
///
/// A token sequence of length `L` yields `max(0, L - w + 1)` phrases for window width `w`;
/// sequences shorter than the window yield nothing. Each source's tokens are extracted
/// independently, so phrases never bridge two input documents.
pub struct PhraseExtractor {
    phrase_word_count: usize,
}

impl PhraseExtractor {
    /// Builds an extractor from the given config.
    ///
    /// A zero `phrase_word_count` is rejected here so extraction itself can never fail.
    pub fn new(config: &PhraseExtractorConfig) -> Result<Self, Error> {
        if config.phrase_word_count == 0 {
            return Err(Error::InvalidArgument(
                "phrase word count must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            phrase_word_count: config.phrase_word_count,
        })
    }

    /// Produces the ordered sequence of all contiguous window-width phrases in `tokens`.
    pub fn extract(&self, tokens: &[Token]) -> Vec<Phrase> {
        tokens
            .windows(self.phrase_word_count)
            .map(|window| window.to_vec())
            .collect()
    }
}

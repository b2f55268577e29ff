use crate::models::PhraseExtractorConfig;

pub const DEFAULT_PHRASE_EXTRACTOR_CONFIG: &PhraseExtractorConfig = &PhraseExtractorConfig {
    phrase_word_count: DEFAULT_PHRASE_WORD_COUNT,
};

/// Default number of words per phrase (`-w/--words`).
pub const DEFAULT_PHRASE_WORD_COUNT: usize = 3;

/// Default number of ranked phrases to report (`-n/--num`).
pub const DEFAULT_RESULT_LIMIT: usize = 100;

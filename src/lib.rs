mod constants;
pub mod models;
pub use constants::{
    DEFAULT_PHRASE_EXTRACTOR_CONFIG, DEFAULT_PHRASE_WORD_COUNT, DEFAULT_RESULT_LIMIT,
};
pub use models::{Error, PhraseExtractor, PhraseExtractorConfig, TextSource};
pub mod types;
mod utils;
pub use types::{
    Phrase, PhraseFrequency, PhraseFrequencyEntry, PhraseFrequencyMap, PhraseIndex, RankedPhrases,
    Token, TokenRef,
};
pub use utils::{count_phrase_frequencies, normalize_text, sort_phrase_frequencies, tokenize};

/// Extracts the most frequent phrases from the given texts using the default phrase width.
///
/// Each text is one source; phrases are formed within a source and counted across all of
/// them. The result holds at most `result_limit` entries, ordered by descending frequency
/// with ties going to the phrase seen first.
pub fn extract_top_phrases(texts: &[String], result_limit: usize) -> Result<RankedPhrases, Error> {
    let ranked_phrases = extract_top_phrases_with_custom_config(
        DEFAULT_PHRASE_EXTRACTOR_CONFIG,
        texts,
        result_limit,
    )?;

    Ok(ranked_phrases)
}

/// Extracts the most frequent phrases from the given texts using a caller-supplied config.
///
/// Fails only on an invalid config (zero phrase width); texts that produce no phrases at
/// all, or a `result_limit` of zero, yield an empty ranking.
pub fn extract_top_phrases_with_custom_config(
    phrase_extractor_config: &PhraseExtractorConfig,
    texts: &[String],
    result_limit: usize,
) -> Result<RankedPhrases, Error> {
    let phrase_extractor = PhraseExtractor::new(phrase_extractor_config)?;

    // Phrases never span a source boundary; sources contribute in processing order, which
    // is what makes the first-occurrence tie-break reproducible across runs.
    let mut phrases: Vec<Phrase> = Vec::new();
    for text in texts {
        let tokens = tokenize(text);
        phrases.extend(phrase_extractor.extract(&tokens));
    }

    let mut ranked_phrases = sort_phrase_frequencies(count_phrase_frequencies(&phrases));
    ranked_phrases.truncate(result_limit);

    Ok(ranked_phrases)
}

#[cfg(doctest)]
mod readme_doctest {
    doc_comment::doctest!("../README.md");
}

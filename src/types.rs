use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An ordered run of exactly `phrase_word_count` tokens drawn from a single source.
/// Equality is exact sequence equality, so `["a", "b"]` and `["b", "a"]` are distinct phrases.
pub type Phrase = Vec<Token>;

/// Represents the total number of occurrences of a phrase within the processed text.
pub type PhraseFrequency = usize;

/// The position of a phrase's first occurrence in the global phrase sequence. Phrases from all
/// sources share one index space, so this doubles as the ranking tie-break key.
pub type PhraseIndex = usize;

/// Frequency plus first-occurrence index for a single distinct phrase.
pub type PhraseFrequencyEntry = (PhraseFrequency, PhraseIndex);

/// Represents a map of distinct phrases to their frequency entries. The sum of the frequencies
/// always equals the total number of phrases tallied into the map.
pub type PhraseFrequencyMap = HashMap<Phrase, PhraseFrequencyEntry>;

/// The final ranking: `(Phrase, PhraseFrequency)` pairs ordered by descending frequency, with
/// ties broken by ascending first-occurrence index.
pub type RankedPhrases = Vec<(Phrase, PhraseFrequency)>;

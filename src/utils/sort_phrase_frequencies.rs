use crate::types::{PhraseFrequencyMap, RankedPhrases};

/// Sorts a mapping of phrases to their frequency entries into the final ranking order.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two phrases have the same frequency, sorts by first-occurrence
///   index in ascending order, so earlier-seen phrases win ties.
///
/// The first-occurrence index is an explicit sort key recorded when the map is built, which
/// keeps the ordering deterministic regardless of how the map iterates.
///
/// # Example
/// ```
/// use phrase_sniffer::{count_phrase_frequencies, sort_phrase_frequencies};
///
/// let phrases = vec![
///     vec!["im".to_string(), "a".to_string()],
///     vec!["a".to_string(), "test".to_string()],
///     vec!["a".to_string(), "test".to_string()],
/// ];
/// let sorted = sort_phrase_frequencies(count_phrase_frequencies(&phrases));
/// assert_eq!(sorted[0], (vec!["a".to_string(), "test".to_string()], 2));
/// assert_eq!(sorted[1], (vec!["im".to_string(), "a".to_string()], 1));
/// ```
pub fn sort_phrase_frequencies(frequencies: PhraseFrequencyMap) -> RankedPhrases {
    let mut entries: Vec<_> = frequencies.into_iter().collect();

    entries.sort_by(|a, b| {
        b.1 .0
            .cmp(&a.1 .0) // Sort by frequency (descending)
            .then_with(|| a.1 .1.cmp(&b.1 .1)) // Secondary sort by first occurrence (ascending)
    });

    entries
        .into_iter()
        .map(|(phrase, (frequency, _))| (phrase, frequency))
        .collect()
}

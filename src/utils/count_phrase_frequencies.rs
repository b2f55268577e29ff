use crate::types::{Phrase, PhraseFrequencyMap};

/// Counts the occurrences of each distinct phrase in the given sequence.
///
/// Built with a single pass: each phrase increments a running count, and the position index of
/// every first-seen phrase is recorded alongside it. That index is what the ranking stage uses
/// to break frequency ties, so ordering never depends on map iteration order.
///
/// The sum of all frequencies in the returned map equals `phrases.len()`.
///
/// # Example
/// ```
/// use phrase_sniffer::count_phrase_frequencies;
///
/// let phrases = vec![
///     vec!["a".to_string(), "test".to_string()],
///     vec!["test".to_string(), "document".to_string()],
///     vec!["a".to_string(), "test".to_string()],
/// ];
/// let frequencies = count_phrase_frequencies(&phrases);
/// assert_eq!(frequencies.get(&phrases[0]), Some(&(2, 0)));
/// assert_eq!(frequencies.get(&phrases[1]), Some(&(1, 1)));
/// ```
pub fn count_phrase_frequencies(phrases: &[Phrase]) -> PhraseFrequencyMap {
    let mut frequencies: PhraseFrequencyMap = PhraseFrequencyMap::new();

    for (index, phrase) in phrases.iter().enumerate() {
        let entry = frequencies.entry(phrase.clone()).or_insert((0, index));
        entry.0 += 1;
    }

    frequencies
}

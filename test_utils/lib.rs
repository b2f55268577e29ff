use std::fs;
use std::path::Path;

use phrase_sniffer::{extract_top_phrases_with_custom_config, PhraseExtractorConfig};

// Helper function to get the expected ranked lines from the text file
pub fn get_expected_phrases(file_path: &Path) -> Vec<(usize, String)> {
    // Read the content of the text file
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    // Extract ranked lines from lines starting with EXPECTED:
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:").map(|rest| {
                let (frequency, phrase) = rest
                    .trim()
                    .split_once(" - ")
                    .expect("Malformed EXPECTED line");
                (
                    frequency
                        .parse()
                        .expect("EXPECTED line frequency is not a number"),
                    phrase.to_string(),
                )
            })
        })
        .collect()
}

/// Strips `EXPECTED:` and `COMMENT:` marker lines from a fixture, leaving only the text the
/// run under test should see.
pub fn strip_marker_lines(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the extraction test for a fixture file
pub fn run_test_for_file(test_file_path: &str, phrase_word_count: usize, result_limit: usize) {
    // Read the content of the text file
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let filtered_text = strip_marker_lines(&raw_text);

    // Log the file being processed
    eprintln!("Testing file: {}", test_file_path);

    let config = PhraseExtractorConfig { phrase_word_count };
    let results = extract_top_phrases_with_custom_config(&config, &[filtered_text], result_limit)
        .expect("Failed to extract phrases");

    // Render the ranking the way the fixture records it
    let rendered: Vec<(usize, String)> = results
        .iter()
        .map(|(phrase, frequency)| (*frequency, phrase.join(" ")))
        .collect();

    let expected_phrases = get_expected_phrases(Path::new(test_file_path));

    assert_eq!(
        rendered, expected_phrases,
        "{} - Ranked output mismatch. Expected: {:?}, but got: {:?}",
        test_file_path, expected_phrases, rendered
    );
}

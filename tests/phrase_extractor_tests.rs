use phrase_sniffer::{tokenize, PhraseExtractor, PhraseExtractorConfig};

#[cfg(test)]
mod phrase_extractor_tests {
    use super::*;

    fn extractor(phrase_word_count: usize) -> PhraseExtractor {
        PhraseExtractor::new(&PhraseExtractorConfig { phrase_word_count })
            .expect("Failed to build extractor from a valid config")
    }

    #[test]
    fn test_phrase_count_matches_window_formula() {
        let tokens = tokenize("this is a test this is only a test");
        assert_eq!(tokens.len(), 9);

        // max(0, L - w + 1) phrases for a sequence of length L
        assert_eq!(extractor(1).extract(&tokens).len(), 9);
        assert_eq!(extractor(2).extract(&tokens).len(), 8);
        assert_eq!(extractor(3).extract(&tokens).len(), 7);
        assert_eq!(extractor(9).extract(&tokens).len(), 1);
    }

    #[test]
    fn test_window_wider_than_sequence_yields_nothing() {
        let tokens = tokenize("too short");
        assert_eq!(extractor(3).extract(&tokens).len(), 0);
        assert_eq!(extractor(10).extract(&tokens).len(), 0);
    }

    #[test]
    fn test_empty_sequence_yields_nothing() {
        let tokens = tokenize("");
        assert_eq!(extractor(1).extract(&tokens).len(), 0);
    }

    #[test]
    fn test_zero_width_config_is_rejected() {
        let result = PhraseExtractor::new(&PhraseExtractorConfig {
            phrase_word_count: 0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_single_width_yields_each_token() {
        let tokens = tokenize("one two three");
        let phrases = extractor(1).extract(&tokens);
        assert_eq!(phrases, vec![vec!["one"], vec!["two"], vec!["three"]]);
    }

    #[test]
    fn test_three_word_phrases_for_two_documents() {
        let first = extractor(3).extract(&tokenize("im a test document"));
        let second = extractor(3).extract(&tokenize("i am also a test document cant you tell"));

        assert_eq!(
            first,
            vec![vec!["im", "a", "test"], vec!["a", "test", "document"]]
        );
        assert_eq!(
            second,
            vec![
                vec!["i", "am", "also"],
                vec!["am", "also", "a"],
                vec!["also", "a", "test"],
                vec!["a", "test", "document"],
                vec!["test", "document", "cant"],
                vec!["document", "cant", "you"],
                vec!["cant", "you", "tell"],
            ]
        );
    }

    #[test]
    fn test_four_word_phrases_for_two_documents() {
        let first = extractor(4).extract(&tokenize("im a test document"));
        let second = extractor(4).extract(&tokenize("i am also a test document cant you tell"));

        assert_eq!(first, vec![vec!["im", "a", "test", "document"]]);
        assert_eq!(
            second,
            vec![
                vec!["i", "am", "also", "a"],
                vec!["am", "also", "a", "test"],
                vec!["also", "a", "test", "document"],
                vec!["a", "test", "document", "cant"],
                vec!["test", "document", "cant", "you"],
                vec!["document", "cant", "you", "tell"],
            ]
        );
    }

    #[test]
    fn test_phrases_preserve_token_order() {
        let tokens = tokenize("b a c");
        let phrases = extractor(2).extract(&tokens);
        // Order within a phrase is positional, never sorted
        assert_eq!(phrases, vec![vec!["b", "a"], vec!["a", "c"]]);
    }
}

pub mod error;
pub use error::Error;

pub mod phrase_extractor;
pub use phrase_extractor::{PhraseExtractor, PhraseExtractorConfig};

pub mod text_source;
pub use text_source::TextSource;

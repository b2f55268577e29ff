use clap::Parser;
use log::error;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use phrase_sniffer::{
    extract_top_phrases_with_custom_config, Error, PhraseExtractorConfig, TextSource,
    DEFAULT_PHRASE_WORD_COUNT, DEFAULT_RESULT_LIMIT,
};

/// Get up to the top N most popular W word phrases in a single or multiple text
/// files. Text can also be piped or redirected in.
#[derive(Parser, Debug)]
#[command(name = "phrase-sniffer", about, long_about = None)]
struct Args {
    /// A file or files to be processed (a piped run reads at most one)
    #[arg(value_name = "filename")]
    filenames: Vec<PathBuf>,

    /// The number of phrases to return
    #[arg(short = 'n', long = "num", default_value_t = DEFAULT_RESULT_LIMIT)]
    num: usize,

    /// The number of words in each phrase
    #[arg(short = 'w', long = "words", default_value_t = DEFAULT_PHRASE_WORD_COUNT)]
    words: usize,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Piped vs. interactive is decided once, before anything else runs; the pipeline
    // itself never queries terminal state.
    let piped = !io::stdin().is_terminal();

    let args = Args::parse();

    if let Err(e) = run(&args, piped) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, piped: bool) -> Result<(), Error> {
    if args.words == 0 {
        return Err(Error::InvalidArgument(
            "--words must be at least 1".to_string(),
        ));
    }

    let sources = TextSource::resolve(&args.filenames, piped)?;

    let mut texts = Vec::with_capacity(sources.len());
    for source in &sources {
        texts.push(source.read()?);
    }

    let config = PhraseExtractorConfig {
        phrase_word_count: args.words,
    };
    let results = extract_top_phrases_with_custom_config(&config, &texts, args.num)?;

    for (phrase, frequency) in results {
        println!("{} - {}", frequency, phrase.join(" "));
    }

    Ok(())
}

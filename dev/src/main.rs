use log::info;
use phrase_sniffer::extract_top_phrases;

fn main() {
    env_logger::init();

    let texts = vec!["The white rabbit ran, and the white rabbit hid.".to_string()];

    info!("Processing {} sample text(s)", texts.len());

    let results = extract_top_phrases(&texts, 10).unwrap();

    println!("Top phrases for the given text {:?}", texts);
    for (phrase, frequency) in results {
        println!("{} - {}", frequency, phrase.join(" "));
    }
}

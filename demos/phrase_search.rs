//! Phrase Search
//!
//! Locate a typed phrase among the words of a laid-out page and report
//! where each occurrence starts on the page.
//!
//! ```bash
//! cargo run --example phrase_search -- "типы данных"
//! ```

use tokseek::PhraseQuery;

struct Word {
    text: &'static str,
    x: u32,
    y: u32,
}

fn main() {
    env_logger::init();

    let phrase = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Типы данных".to_string());

    let mut page = vec![
        Word { text: "Типы", x: 10, y: 70 },
        Word { text: "данных:", x: 70, y: 70 },
        Word { text: "Лекция", x: 10, y: 10 },
        Word { text: "3.", x: 90, y: 10 },
        Word { text: "Типы", x: 10, y: 40 },
        Word { text: "данных", x: 70, y: 40 },
        Word { text: "в", x: 150, y: 40 },
        Word { text: "Rust", x: 170, y: 40 },
    ];
    // reading order
    page.sort_by_key(|w| (w.y, w.x));

    let query = match PhraseQuery::parse(phrase) {
        Ok(query) => query,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!("Phrase: {:?} -> {:?}", query.phrase(), query.tokens());

    let hits = query.occurrences(&page, |w| w.text);
    println!("Occurrences: {}\n", hits.len());

    for (i, hit) in hits.iter().enumerate() {
        let words: Vec<&str> = hit.iter().map(|w| w.text).collect();
        println!("[{}] at ({}, {}): {}", i, hit[0].x, hit[0].y, words.join(" "));
    }
}

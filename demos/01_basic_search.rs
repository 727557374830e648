//! Basic Token Search
//!
//! The minimal example: find a token run inside a token sequence.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example 01_basic_search
//! ```

use tokseek::{kmp_search, Pattern};

fn main() {
    env_logger::init();

    let haystack = ["aaa", "aaa", "aaa", "aaa"];
    let needle = ["aa", "aa"];

    let indices = kmp_search(&haystack, &needle);
    let line: Vec<String> = indices.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));

    // The same search, one span per occurrence
    let pattern = Pattern::new(needle);
    println!("lps: {:?}", pattern.lps());
    for span in pattern.find_iter(&haystack) {
        println!("match at {span}: {:?}", &haystack[span.range()]);
    }
}

//! Simple CLI that reads an HTML snapshot from stdin and prints the rendered
//! citation plus metadata as JSON to stdout. The page URL is the first
//! argument; options JSON may be passed as the second.

use std::io::{self, Read};

use wikicite::{generate_bytes, RenderOptions};

fn main() {
    let mut args = std::env::args().skip(1);
    let page_url = args.next().unwrap_or_default();

    let options = match args.next() {
        Some(json) => match RenderOptions::from_json(&json) {
            Ok(options) => options,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        None => RenderOptions::default(),
    };

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let citation = generate_bytes(&html, &page_url, &options);
    println!("{}", citation.to_json().unwrap_or_default());
}

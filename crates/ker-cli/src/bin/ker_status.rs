// ker-status: Check that the models load.
//
// Loads every supported language and prints OK with the languages that are
// ready. Languages that failed are listed on stderr. Exits with code 1 when
// the word lists are missing or no language loads.
//
// Usage:
//   ker-status [-m MODEL_DIR]
//
// Options:
//   -m, --model-dir PATH   Directory containing stopwords.txt and the models
//   -h, --help             Print help

use std::io::{self, Write};

use ker_core::enums::Language;

fn main() {
    ker_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ker_cli::wants_help(&args) {
        println!("ker-status: Check that the models load.");
        println!();
        println!("Usage: ker-status [-m MODEL_DIR]");
        println!();
        println!("Prints OK and the available languages, one per line.");
        println!();
        println!("Options:");
        println!("  -m, --model-dir PATH   Directory containing stopwords.txt and the models");
        println!("  -h, --help             Print this help");
        return;
    }

    let (opts, _) = ker_cli::parse_options(&args).unwrap_or_else(|e| ker_cli::fatal(&e));
    let extractor =
        ker_cli::load_extractor(&opts, &Language::ALL).unwrap_or_else(|e| ker_cli::fatal(&e));

    for (lang, err) in extractor.failures() {
        eprintln!("unavailable: {lang}: {err}");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "OK");
    for lang in extractor.languages() {
        let _ = writeln!(out, "{lang}");
    }
}

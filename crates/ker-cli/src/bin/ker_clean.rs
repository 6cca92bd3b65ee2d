// ker-clean: Clean document lines from stdin.
//
// Strips leading enumeration markers, parenthesized annotations and trailing
// dot-leaders with page numbers, then prints the non-empty results.
//
// Usage:
//   ker-clean
//
// Options:
//   -h, --help   Print help

use std::io::{self, Read, Write};

use ker_extract::cleaner::{clean_lines, split_lines};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ker_cli::wants_help(&args) {
        println!("ker-clean: Clean document lines.");
        println!();
        println!("Usage: ker-clean");
        println!();
        println!("Reads text from stdin and prints each line with enumeration");
        println!("markers, annotations and page-number trailers removed.");
        println!("Lines that clean down to nothing are dropped.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| ker_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in clean_lines(split_lines(&input)) {
        let _ = writeln!(out, "{line}");
    }
}

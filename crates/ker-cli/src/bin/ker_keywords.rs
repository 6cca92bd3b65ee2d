// ker-keywords: Extract keywords from a document on stdin.
//
// Reads the document from stdin as raw bytes, rejects input that is not
// UTF-8, and prints the keywords as a JSON array of [form, score] pairs.
//
// Usage:
//   ker-keywords [-m MODEL_DIR] [OPTIONS]
//
// Options:
//   -m, --model-dir PATH   Directory containing stopwords.txt and the models
//   -l, --lang CODE        Document language: cs, en (default: en)
//   -n, --max-words N      Maximum number of keywords (default: 15)
//   -t, --threshold SCORE  Minimum keyword score
//   --pretty               Indent the JSON output
//   -h, --help             Print help

use std::io::{self, Read, Write};

fn main() {
    ker_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ker_cli::wants_help(&args) {
        println!("ker-keywords: Extract keywords from a document.");
        println!();
        println!("Usage: ker-keywords [-m MODEL_DIR] [OPTIONS]");
        println!();
        println!("Reads a UTF-8 document from stdin and prints its keywords as");
        println!("a JSON array of [form, score] pairs, best first.");
        println!();
        println!("Options:");
        println!("  -m, --model-dir PATH   Directory containing stopwords.txt and the models");
        println!("  -l, --lang CODE        Document language: cs, en (default: en)");
        println!("  -n, --max-words N      Maximum number of keywords (default: 15)");
        println!("  -t, --threshold SCORE  Minimum keyword score");
        println!("  --pretty               Indent the JSON output");
        println!("  -h, --help             Print this help");
        return;
    }

    let (opts, args) = ker_cli::parse_options(&args).unwrap_or_else(|e| ker_cli::fatal(&e));
    let pretty = args.iter().any(|a| a == "--pretty");

    let extractor =
        ker_cli::load_extractor(&opts, &[opts.lang]).unwrap_or_else(|e| ker_cli::fatal(&e));

    let mut body = Vec::new();
    io::stdin()
        .read_to_end(&mut body)
        .unwrap_or_else(|e| ker_cli::fatal(&format!("failed to read stdin: {e}")));

    let keywords = extractor
        .extract_bytes(opts.lang, &body)
        .unwrap_or_else(|e| ker_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = if pretty {
        serde_json::to_writer_pretty(&mut out, &keywords)
    } else {
        serde_json::to_writer(&mut out, &keywords)
    };
    if let Err(e) = written {
        ker_cli::fatal(&format!("failed to write output: {e}"));
    }
    let _ = writeln!(out);
}

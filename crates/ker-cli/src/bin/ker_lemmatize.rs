// ker-lemmatize: Show the nouns and adjectives of each cleaned line.
//
// Loads the lexicon for one language, cleans stdin line by line and prints
// the lemma and surface form of every candidate word, followed by the number
// of tokens the lexicon tagged.
//
// Usage:
//   ker-lemmatize [-m MODEL_DIR] [-l LANG]
//
// Options:
//   -m, --model-dir PATH   Directory containing stopwords.txt and the models
//   -l, --lang CODE        Text language: cs, en (default: en)
//   --no-guess             Skip words missing from the lexicon
//   -h, --help             Print help

use std::io::{self, Read, Write};

use ker_extract::cleaner::{clean_lines, split_lines};
use ker_extract::normalizer::{LemmaNormalizer, LexiconNormalizer};
use ker_extract::resources::ModelPaths;

fn main() {
    ker_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ker_cli::wants_help(&args) {
        println!("ker-lemmatize: Show candidate lemmas of cleaned text.");
        println!();
        println!("Usage: ker-lemmatize [-m MODEL_DIR] [-l LANG]");
        println!();
        println!("Reads text from stdin and prints one line per noun or adjective:");
        println!("  <lemma>\\t<surface form>");
        println!();
        println!("Options:");
        println!("  -m, --model-dir PATH   Directory containing stopwords.txt and the models");
        println!("  -l, --lang CODE        Text language: cs, en (default: en)");
        println!("  --no-guess             Skip words missing from the lexicon");
        println!("  -h, --help             Print this help");
        return;
    }

    let (opts, args) = ker_cli::parse_options(&args).unwrap_or_else(|e| ker_cli::fatal(&e));
    let guess = !args.iter().any(|a| a == "--no-guess");

    let dir = ker_cli::find_model_dir(opts.model_dir.as_deref())
        .unwrap_or_else(|e| ker_cli::fatal(&e));
    let mut normalizer = LexiconNormalizer::load(&ModelPaths::from_dir(dir).tagger(opts.lang))
        .unwrap_or_else(|e| ker_cli::fatal(&e.to_string()))
        .with_guessing(guess);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| ker_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut token_count = 0;
    let mut candidates = 0;
    for line in clean_lines(split_lines(&input)) {
        let normalized = normalizer.normalize(&line);
        token_count += normalized.token_count;
        candidates += normalized.tokens.len();
        for token in &normalized.tokens {
            let _ = writeln!(out, "{}\t{}", token.lemma, token.surface);
        }
    }
    let _ = writeln!(out, "=== {candidates} candidates in {token_count} tokens ===");
}

// ker-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use ker_core::enums::Language;
use ker_extract::resources::STOPWORDS_FILE;
use ker_extract::{ExtractorConfig, KeywordExtractor, RankOptions};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the model directory.
pub const MODEL_PATH_ENV: &str = "KER_MODEL_PATH";

/// Options shared by the tools that load models.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub model_dir: Option<String>,
    pub lang: Language,
    pub rank: RankOptions,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            model_dir: None,
            lang: Language::English,
            rank: RankOptions::default(),
        }
    }
}

/// Parse `-m/--model-dir`, `-l/--lang`, `-n/--max-words` and
/// `-t/--threshold`, in either `--flag VALUE` or `--flag=VALUE` form.
///
/// Returns the options and the arguments that were not recognized.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), String> {
    let mut opts = CliOptions::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let known = matches!(
            flag,
            "-m" | "--model-dir" | "-l" | "--lang" | "-n" | "--max-words" | "-t" | "--threshold"
        );
        if !known {
            remaining.push(arg.clone());
            continue;
        }
        let value = match inline {
            Some(v) => v,
            None => iter
                .next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))?,
        };
        match flag {
            "-m" | "--model-dir" => opts.model_dir = Some(value),
            "-l" | "--lang" => {
                opts.lang = value.parse::<Language>().map_err(|e| e.to_string())?;
            }
            "-n" | "--max-words" => {
                let max = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid value for {flag}: {value}"))?;
                opts.rank = opts.rank.with_max_words(max);
            }
            _ => {
                let threshold: f64 = value
                    .parse()
                    .map_err(|_| format!("invalid value for {flag}: {value}"))?;
                opts.rank = opts.rank.with_threshold(threshold);
            }
        }
    }

    Ok((opts, remaining))
}

/// Find the directory holding the model files.
///
/// Search order:
/// 1. `model_dir` argument (if provided)
/// 2. `KER_MODEL_PATH` environment variable
/// 3. `~/.ker/models`
/// 4. `/usr/share/ker/models`
/// 5. `./models`
///
/// A directory qualifies when it contains `stopwords.txt`.
pub fn find_model_dir(model_dir: Option<&str>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(model_dir);

    search_paths
        .iter()
        .find(|dir| dir.join(STOPWORDS_FILE).is_file())
        .cloned()
        .ok_or_else(|| {
            format!(
                "could not find {} in any of the search paths:\n{}",
                STOPWORDS_FILE,
                search_paths
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
}

fn build_search_paths(model_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = model_dir {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(MODEL_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".ker").join("models"));
    }
    paths.push(PathBuf::from("/usr/share/ker/models"));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("models"));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Locate the models and load an extractor for `languages`.
pub fn load_extractor(
    opts: &CliOptions,
    languages: &[Language],
) -> Result<KeywordExtractor, String> {
    let dir = find_model_dir(opts.model_dir.as_deref())?;
    tracing::debug!(dir = %dir.display(), "using model directory");
    let config = ExtractorConfig::new(&dir)
        .with_languages(languages)
        .with_rank_options(opts.rank);
    KeywordExtractor::load(&config)
        .map_err(|e| format!("failed to load models from {}: {e}", dir.display()))
}

/// Send `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let (opts, rest) = parse_options(&args(&["--sentences"])).unwrap();
        assert_eq!(opts, CliOptions::default());
        assert_eq!(rest, args(&["--sentences"]));
    }

    #[test]
    fn parses_separate_and_inline_values() {
        let (opts, rest) =
            parse_options(&args(&["-l", "cs", "--max-words=5", "-t", "0.25", "-m", "/m"]))
                .unwrap();
        assert!(rest.is_empty());
        assert_eq!(opts.lang, Language::Czech);
        assert_eq!(opts.rank.max_words, 5);
        assert_eq!(opts.rank.threshold, Some(0.25));
        assert_eq!(opts.model_dir.as_deref(), Some("/m"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_options(&args(&["--lang", "xx"])).is_err());
        assert!(parse_options(&args(&["-n", "many"])).is_err());
        assert!(parse_options(&args(&["-t"])).is_err());
    }

    #[test]
    fn explicit_model_dir_wins() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../ker-extract/tests/data/models");
        let found = find_model_dir(Some(dir)).unwrap();
        assert_eq!(found, PathBuf::from(dir));
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["x", "--help"])));
        assert!(!wants_help(&args(&["-l", "en"])));
    }
}

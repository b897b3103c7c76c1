// yomi-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use yomi_align::store::DictionarySet;

/// Default dictionary file name.
pub const DICT_FILE: &str = "prefixtrees";

/// Default word list file name.
pub const WORDS_FILE: &str = "words.text";

/// Default pronunciation output file name.
pub const OUTPUT_FILE: &str = "pronunciations.text";

/// Locate the dictionary file.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `YOMI_DICT_PATH` environment variable (a file, or a directory
///    containing `prefixtrees`)
/// 3. `prefixtrees` in the current working directory
pub fn find_dict_file(path: Option<&str>) -> PathBuf {
    if let Some(p) = path {
        return PathBuf::from(p);
    }
    if let Ok(env_path) = std::env::var("YOMI_DICT_PATH") {
        let p = PathBuf::from(&env_path);
        if p.is_dir() {
            return p.join(DICT_FILE);
        }
        return p;
    }
    PathBuf::from(DICT_FILE)
}

/// Read and parse the dictionary file.
pub fn load_dictionaries(path: &Path) -> Result<DictionarySet, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    DictionarySet::from_text(&text).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Write the dictionary file.
pub fn save_dictionaries(path: &Path, dicts: &DictionarySet) -> Result<(), String> {
    std::fs::write(path, dicts.to_text())
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

/// Parse one `--flag VALUE`, `--flag=VALUE` or `-f VALUE` option out of the
/// argument list.
///
/// Returns `(value, remaining_args)`.
pub fn parse_value_arg(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let long_eq = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Format `text` split at a character index: `consumed|rest`.
///
/// Used by the diagnostic output to show how far an alignment or
/// transliteration got into its input.
pub fn cursor_split(text: &str, cursor: usize) -> String {
    let byte = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(i, _)| i);
    format!("{}|{}", &text[..byte], &text[byte..])
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
    fn parse_long_with_value() {
        let (value, rest) = parse_value_arg(&args(&["--dict", "d.txt", "x"]), "--dict", "-d");
        assert_eq!(value.as_deref(), Some("d.txt"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn parse_long_with_equals() {
        let (value, rest) = parse_value_arg(&args(&["--dict=d.txt"]), "--dict", "-d");
        assert_eq!(value.as_deref(), Some("d.txt"));
        assert!(rest.is_empty());
    }

    #[test]
    fn parse_short_form() {
        let (value, rest) = parse_value_arg(&args(&["-d", "d.txt"]), "--dict", "-d");
        assert_eq!(value.as_deref(), Some("d.txt"));
        assert!(rest.is_empty());
    }

    #[test]
    fn absent_flag_passes_args_through() {
        let (value, rest) = parse_value_arg(&args(&["a", "b"]), "--dict", "-d");
        assert_eq!(value, None);
        assert_eq!(rest, args(&["a", "b"]));
    }

    #[test]
    fn cursor_split_at_char_boundary() {
        assert_eq!(cursor_split("kana", 2), "ka|na");
        assert_eq!(cursor_split("\u{304B}\u{306A}", 1), "\u{304B}|\u{306A}");
        assert_eq!(cursor_split("ka", 0), "|ka");
        assert_eq!(cursor_split("ka", 2), "ka|");
        assert_eq!(cursor_split("ka", 9), "ka|");
    }
}

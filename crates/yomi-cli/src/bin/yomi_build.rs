// yomi-build: interactively bootstrap pronunciation dictionaries.
//
// Reads a word list (LATIN<TAB>KANA per line), transliterates each kana
// spelling to romaji, aligns it against the Latin spelling and collects the
// merged pronunciations. When a pair cannot be processed with the current
// dictionaries, prints the farthest-progress diagnostic and drops into a
// command loop so the dictionaries can be patched and the pair retried.
//
// Usage:
//   yomi-build [-d DICT_FILE] [-w WORDS_FILE] [-o OUTPUT_FILE]
//
// Commands at the `: ` prompt:
//   k KANA ROMAJI   add a kana -> romaji entry
//   l LATIN PRON    add a latin -> pronunciation entry
//   r ROMAJI PRON   add a romaji -> pronunciation entry
//   s               save dictionaries and collected pronunciations
//   q               quit
//   (empty line)    retry the current word pair

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use yomi_align::engine::{AlignError, Aligner};
use yomi_align::store::DictionarySet;
use yomi_align::translit::{self, TransliterationError};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if yomi_cli::wants_help(&args) {
        println!("yomi-build: interactively bootstrap pronunciation dictionaries.");
        println!();
        println!("Usage: yomi-build [-d DICT_FILE] [-w WORDS_FILE] [-o OUTPUT_FILE]");
        println!();
        println!("Reads LATIN<TAB>KANA word pairs and aligns each pair into one");
        println!("pronunciation. On failure, a command prompt lets you patch the");
        println!("dictionaries and retry:");
        println!("  k KANA ROMAJI   add a kana -> romaji entry");
        println!("  l LATIN PRON    add a latin -> pronunciation entry");
        println!("  r ROMAJI PRON   add a romaji -> pronunciation entry");
        println!("  s               save dictionaries and pronunciations");
        println!("  q               quit");
        println!();
        println!("Options:");
        println!("  -d, --dict FILE     Dictionary file (default: {})", yomi_cli::DICT_FILE);
        println!("  -w, --words FILE    Word list (default: {})", yomi_cli::WORDS_FILE);
        println!("  -o, --output FILE   Pronunciation output (default: {})", yomi_cli::OUTPUT_FILE);
        println!("  -h, --help          Print this help");
        return;
    }

    let (dict_arg, args) = yomi_cli::parse_value_arg(&args, "--dict", "-d");
    let (words_arg, args) = yomi_cli::parse_value_arg(&args, "--words", "-w");
    let (output_arg, args) = yomi_cli::parse_value_arg(&args, "--output", "-o");
    if let Some(unknown) = args.first() {
        yomi_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let dict_path = yomi_cli::find_dict_file(dict_arg.as_deref());
    let words_path = PathBuf::from(words_arg.as_deref().unwrap_or(yomi_cli::WORDS_FILE));
    let output_path = PathBuf::from(output_arg.as_deref().unwrap_or(yomi_cli::OUTPUT_FILE));

    let mut dicts =
        yomi_cli::load_dictionaries(&dict_path).unwrap_or_else(|e| yomi_cli::fatal(&e));
    let words = std::fs::read_to_string(&words_path).unwrap_or_else(|e| {
        yomi_cli::fatal(&format!("failed to read {}: {}", words_path.display(), e))
    });

    let mut pronunciations: Vec<(String, String)> = Vec::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    for line in words.lines() {
        let Some((latin, kana)) = line.split_once('\t') else {
            if !line.is_empty() {
                eprintln!("skipping malformed word line: {line}");
            }
            continue;
        };

        loop {
            match attempt(latin, kana, &dicts) {
                Ok(pronunciation) => {
                    println!(">>> {latin} \u{2192} {pronunciation}");
                    pronunciations.push((latin.to_string(), pronunciation));
                    break;
                }
                Err(err) => {
                    report(&err, latin, kana);
                    match command_loop(
                        &mut input,
                        &mut dicts,
                        &pronunciations,
                        &dict_path,
                        &output_path,
                    ) {
                        Outcome::Retry => {}
                        Outcome::Quit => return,
                    }
                }
            }
        }
    }
}

enum AttemptError {
    Translit(TransliterationError),
    Align { romaji: String, err: AlignError },
}

/// One full attempt at a word pair: transliterate the kana, then align.
fn attempt(latin: &str, kana: &str, dicts: &DictionarySet) -> Result<String, AttemptError> {
    let romaji = translit::transliterate(kana, &dicts.kana).map_err(AttemptError::Translit)?;
    Aligner::new(&dicts.latin, &dicts.romaji)
        .align(latin, &romaji)
        .map_err(|err| AttemptError::Align { romaji, err })
}

/// Show how far the attempt got: the partial output, then each input split
/// at its cursor.
fn report(err: &AttemptError, latin: &str, kana: &str) {
    match err {
        AttemptError::Translit(e) => {
            let (cursor, partial) = match e {
                TransliterationError::NoTransliteration { cursor, partial }
                | TransliterationError::Ambiguous {
                    cursor, partial, ..
                } => (*cursor, partial),
            };
            println!("{partial}\u{2026}");
            println!("{}", yomi_cli::cursor_split(kana, cursor));
            println!("{e}");
        }
        AttemptError::Align { romaji, err } => match err {
            AlignError::NoAlignment(failure) => {
                println!("{}\u{2026}", failure.partial);
                println!("{}", yomi_cli::cursor_split(latin, failure.latin_cursor));
                println!("{}", yomi_cli::cursor_split(romaji, failure.kana_cursor));
                println!("{err}");
            }
            AlignError::StepLimitExceeded(_) => println!("{err}"),
        },
    }
}

enum Outcome {
    Retry,
    Quit,
}

/// Prompt for dictionary-patching commands until an empty line (retry the
/// current pair) or `q`. Stdin closing counts as `q`.
fn command_loop(
    input: &mut impl BufRead,
    dicts: &mut DictionarySet,
    pronunciations: &[(String, String)],
    dict_path: &Path,
    output_path: &Path,
) -> Outcome {
    loop {
        print!(": ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return Outcome::Quit,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                return Outcome::Quit;
            }
        }

        let command: Vec<&str> = line.split_whitespace().collect();
        match command.as_slice() {
            [] => return Outcome::Retry,
            ["k", kana, romaji] => dicts.kana.insert(kana, *romaji),
            ["l", latin, pronunciation] => dicts.latin.insert(latin, *pronunciation),
            ["r", romaji, pronunciation] => dicts.romaji.insert(romaji, *pronunciation),
            ["s"] => {
                if let Err(e) = save(dicts, pronunciations, dict_path, output_path) {
                    eprintln!("error: {e}");
                }
            }
            ["q"] => return Outcome::Quit,
            _ => println!("?"),
        }
    }
}

fn save(
    dicts: &DictionarySet,
    pronunciations: &[(String, String)],
    dict_path: &Path,
    output_path: &Path,
) -> Result<(), String> {
    yomi_cli::save_dictionaries(dict_path, dicts)?;

    let mut out = String::new();
    for (latin, pronunciation) in pronunciations {
        out.push_str(latin);
        out.push('\t');
        out.push_str(pronunciation);
        out.push('\n');
    }
    std::fs::write(output_path, out)
        .map_err(|e| format!("failed to write {}: {}", output_path.display(), e))
}

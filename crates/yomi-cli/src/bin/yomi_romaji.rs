// yomi-romaji: transliterate kana spellings from stdin.
//
// Reads kana words from stdin (one per line) and prints the romaji
// rendering, or an error line for words the kana dictionary cannot cover.
//
// Usage:
//   yomi-romaji [-d DICT_FILE]

use std::io::{self, BufRead, Write};

use yomi_align::translit;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if yomi_cli::wants_help(&args) {
        println!("yomi-romaji: transliterate kana from stdin.");
        println!();
        println!("Usage: yomi-romaji [-d DICT_FILE]");
        println!();
        println!("Reads kana words from stdin (one per line) and prints the romaji");
        println!("rendering, or `E: word cause` when transliteration fails.");
        println!();
        println!("Options:");
        println!("  -d, --dict FILE   Dictionary file (default: {})", yomi_cli::DICT_FILE);
        println!("  -h, --help        Print this help");
        return;
    }

    let (dict_arg, args) = yomi_cli::parse_value_arg(&args, "--dict", "-d");
    if let Some(unknown) = args.first() {
        yomi_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let dict_path = yomi_cli::find_dict_file(dict_arg.as_deref());
    let dicts = yomi_cli::load_dictionaries(&dict_path).unwrap_or_else(|e| yomi_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match translit::transliterate(word, &dicts.kana) {
            Ok(romaji) => {
                let _ = writeln!(out, "{romaji}");
            }
            Err(e) => {
                let _ = writeln!(out, "E: {word} {e}");
            }
        }
    }
}

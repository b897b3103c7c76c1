// yomi-pronounce: align word pairs from stdin, non-interactively.
//
// Reads LATIN<TAB>KANA pairs from stdin (one per line) and prints one line
// per pair:
//   P: latin pronunciation    (aligned)
//   E: latin cause            (failed)
//
// Usage:
//   yomi-pronounce [-d DICT_FILE]

use std::io::{self, BufRead, Write};

use yomi_align::engine::Aligner;
use yomi_align::translit;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if yomi_cli::wants_help(&args) {
        println!("yomi-pronounce: align word pairs from stdin.");
        println!();
        println!("Usage: yomi-pronounce [-d DICT_FILE]");
        println!();
        println!("Reads LATIN<TAB>KANA pairs from stdin (one per line). Prints:");
        println!("  P: latin pronunciation    (aligned)");
        println!("  E: latin cause            (failed)");
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
    let aligner = Aligner::new(&dicts.latin, &dicts.romaji);

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
        if line.is_empty() {
            continue;
        }
        let Some((latin, kana)) = line.split_once('\t') else {
            eprintln!("skipping malformed line: {line}");
            continue;
        };

        let romaji = match translit::transliterate(kana, &dicts.kana) {
            Ok(romaji) => romaji,
            Err(e) => {
                let _ = writeln!(out, "E: {latin} {e}");
                continue;
            }
        };
        match aligner.align(latin, &romaji) {
            Ok(pronunciation) => {
                let _ = writeln!(out, "P: {latin} {pronunciation}");
            }
            Err(e) => {
                let _ = writeln!(out, "E: {latin} {e}");
            }
        }
    }
}

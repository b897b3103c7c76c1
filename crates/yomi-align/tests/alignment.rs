//! End-to-end alignment scenarios over hand-built dictionaries.
//!
//! These exercise the full pipeline the interactive bootstrap tool uses:
//! transliterate the kana spelling, then align it against the Latin
//! spelling through the latin and romaji dictionaries.

use yomi_align::engine::{AlignError, Aligner, FailureCause};
use yomi_align::store::DictionarySet;
use yomi_align::translit::transliterate;
use yomi_trie::trie::PrefixTrie;

fn dict(entries: &[(&str, &str)]) -> PrefixTrie {
    let mut trie = PrefixTrie::new();
    for (key, label) in entries {
        trie.insert(key, *label);
    }
    trie
}

#[test]
fn transliterate_then_align() {
    let mut dicts = DictionarySet::new();
    dicts.kana.insert("\u{304B}", "ka"); // か
    dicts.kana.insert("\u{306A}", "na"); // な
    dicts.latin.insert("ca", "ka");
    dicts.latin.insert("na", "na");
    dicts.romaji.insert("ka", "ka");
    dicts.romaji.insert("na", "na");

    let romaji = transliterate("\u{304B}\u{306A}", &dicts.kana).unwrap();
    assert_eq!(romaji, "kana");

    let pronunciation = Aligner::new(&dicts.latin, &dicts.romaji)
        .align("cana", &romaji)
        .unwrap();
    assert_eq!(pronunciation, "kana");
}

#[test]
fn ambiguity_resolved_by_shared_label() {
    let latin = dict(&[("a", "x"), ("a", "y")]);
    let kana = dict(&[("a", "y")]);
    assert_eq!(Aligner::new(&latin, &kana).align("a", "a").unwrap(), "y");
}

#[test]
fn remainder_bridges_uneven_keys() {
    let latin = dict(&[("a", "xy")]);
    let kana = dict(&[("p", "x"), ("q", "y")]);
    assert_eq!(Aligner::new(&latin, &kana).align("a", "pq").unwrap(), "xy");
}

#[test]
fn failure_reports_farthest_branch_not_first_or_last_explored() {
    // Three dead-end branches at different depths:
    //   - latin "ab" x kana "p" reaches (2, 1) and stops (explored last);
    //   - latin "a" then "b" x "q" with the remainder pair (z, x) stops at
    //     cursor sum 4 (explored first among the deep pair);
    //   - latin "a" then "b" x "qr" reaches (2, 3) before its leftover "z"
    //     has no partner (the deepest, explored in the middle).
    let latin = dict(&[("a", "m"), ("ab", "w"), ("b", "nz")]);
    let kana = dict(&[("p", "m"), ("p", "w"), ("q", "nx"), ("qr", "n")]);

    let err = Aligner::new(&latin, &kana).align("ab", "pqr").unwrap_err();
    let AlignError::NoAlignment(failure) = err else {
        panic!("expected NoAlignment, got {err:?}");
    };

    assert_eq!(failure.cause, FailureCause::NoMatchingKanaPrefix);
    assert_eq!((failure.latin_cursor, failure.kana_cursor), (2, 3));
    assert_eq!(failure.partial, "mn");
    assert_eq!(failure.latin_remainder, "z");
    assert_eq!(failure.kana_remainder, "");
}

#[test]
fn outcome_is_deterministic() {
    let latin = dict(&[("a", "m"), ("ab", "w"), ("b", "nz")]);
    let kana = dict(&[("p", "m"), ("p", "w"), ("q", "nx"), ("qr", "n")]);
    let aligner = Aligner::new(&latin, &kana);

    let first = aligner.align("ab", "pqr");
    for _ in 0..20 {
        assert_eq!(aligner.align("ab", "pqr"), first);
    }
}

#[test]
fn dictionary_patch_turns_failure_into_success() {
    // The retry-after-edit workflow: a failed pair succeeds once the
    // operator adds the missing entries, without changing the inputs.
    let mut dicts = DictionarySet::new();
    dicts.latin.insert("ka", "ka");
    dicts.romaji.insert("ka", "ka");

    let aligner = Aligner::new(&dicts.latin, &dicts.romaji);
    assert!(aligner.align("kana", "kana").is_err());
    drop(aligner);

    dicts.latin.insert("na", "na");
    dicts.romaji.insert("na", "na");
    let pronunciation = Aligner::new(&dicts.latin, &dicts.romaji)
        .align("kana", "kana")
        .unwrap();
    assert_eq!(pronunciation, "kana");
}

#[test]
fn serialized_dictionaries_align_identically() {
    let mut dicts = DictionarySet::new();
    dicts.latin.insert("ca", "ka");
    dicts.latin.insert("na", "na");
    dicts.romaji.insert("ka", "ka");
    dicts.romaji.insert("na", "na");

    let restored = DictionarySet::from_text(&dicts.to_text()).unwrap();

    let before = Aligner::new(&dicts.latin, &dicts.romaji).align("cana", "kana");
    let after = Aligner::new(&restored.latin, &restored.romaji).align("cana", "kana");
    assert_eq!(before, after);
    assert_eq!(before.unwrap(), "kana");
}

// Kana-to-romaji transliteration.
//
// Unlike the alignment search this is a plain greedy walk: at each position
// the longest matching kana prefix is taken and must map to exactly one
// romaji label. Ambiguity here means the kana dictionary needs a longer,
// more specific entry.

use yomi_trie::matcher::match_prefixes;
use yomi_trie::trie::PrefixTrie;

/// Error type for transliteration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterationError {
    /// No dictionary prefix matches at the cursor.
    #[error("no transliteration at character {cursor}")]
    NoTransliteration {
        /// Characters consumed before the walk stopped.
        cursor: usize,
        /// Romaji accumulated before the walk stopped.
        partial: String,
    },

    /// The longest matching prefix does not have exactly one romaji label.
    #[error("ambiguous transliteration for {key:?} at character {cursor}")]
    Ambiguous {
        /// The offending dictionary key.
        key: String,
        /// Characters consumed before the ambiguous key.
        cursor: usize,
        /// Romaji accumulated before the ambiguous key.
        partial: String,
    },
}

/// Convert a kana spelling to romaji using the kana dictionary.
pub fn transliterate(kana: &str, dict: &PrefixTrie) -> Result<String, TransliterationError> {
    let chars: Vec<char> = kana.chars().collect();
    let mut cursor = 0;
    let mut romaji = String::new();

    while cursor < chars.len() {
        let prefixes = match_prefixes(&chars[cursor..], dict);
        let Some(longest) = prefixes.first() else {
            return Err(TransliterationError::NoTransliteration {
                cursor,
                partial: romaji,
            });
        };

        // match_prefixes only returns labeled keys.
        let Ok(labels) = dict.lookup(longest) else {
            return Err(TransliterationError::NoTransliteration {
                cursor,
                partial: romaji,
            });
        };

        let mut iter = labels.iter();
        match (iter.next(), iter.next()) {
            (Some(label), None) => {
                romaji.push_str(label);
                cursor += longest.chars().count();
            }
            _ => {
                return Err(TransliterationError::Ambiguous {
                    key: longest.clone(),
                    cursor,
                    partial: romaji,
                });
            }
        }
    }

    Ok(romaji)
}

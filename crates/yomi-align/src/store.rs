// Dictionary set: the three persisted tables of a bootstrap session.

use yomi_trie::format;
use yomi_trie::trie::PrefixTrie;

/// Number of tables in a dictionary file.
pub const TABLE_COUNT: usize = 3;

/// Error type for dictionary-set parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The file had fewer blank-line-separated tables than expected.
    #[error("dictionary file has {actual} tables, expected {expected}")]
    MissingTables {
        /// Tables a complete file carries.
        expected: usize,
        /// Tables actually found.
        actual: usize,
    },
}

/// The three dictionaries of a bootstrap session, in file order.
#[derive(Debug, Clone, Default)]
pub struct DictionarySet {
    /// Kana spelling fragments to romaji.
    pub kana: PrefixTrie,
    /// Latin spelling fragments to pronunciation fragments.
    pub latin: PrefixTrie,
    /// Romaji fragments to pronunciation fragments.
    pub romaji: PrefixTrie,
}

impl DictionarySet {
    /// Create a set of three empty dictionaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary file: three tables separated by blank lines,
    /// in the order kana, latin, romaji.
    pub fn from_text(text: &str) -> Result<Self, StoreError> {
        let tables: Vec<&str> = text.split("\n\n").collect();
        if tables.len() < TABLE_COUNT {
            return Err(StoreError::MissingTables {
                expected: TABLE_COUNT,
                actual: tables.len(),
            });
        }
        Ok(Self {
            kana: format::deserialize(tables[0]),
            latin: format::deserialize(tables[1]),
            romaji: format::deserialize(tables[2]),
        })
    }

    /// Serialize back to the file format: each table followed by one
    /// separating blank line. An empty table is a single blank line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for table in [&self.kana, &self.latin, &self.romaji] {
            out.push_str(&format::serialize(table));
            out.push('\n');
        }
        out
    }
}

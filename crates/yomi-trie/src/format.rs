// Dictionary text format: one line per labeled key.
//
// Each line is `KEY<TAB>LABEL1<TAB>LABEL2...`; internal nodes without labels
// get no line. A dictionary with no entries serializes to exactly one blank
// line. Several tables are joined with a blank line between them (see the
// dictionary store in yomi-align).

use crate::trie::{Node, PrefixTrie};

/// Serialize a dictionary to its text form.
///
/// Depth-first: a node's own labels are emitted before its children, and
/// children are visited in sorted symbol order, so the output for a given
/// dictionary is byte-identical across runs. Labels within a line appear in
/// sorted order.
pub fn serialize(dict: &PrefixTrie) -> String {
    let mut out = String::new();
    let mut key = String::new();
    serialize_node(dict.root(), &mut key, &mut out);
    if out.is_empty() {
        out.push('\n');
    }
    out
}

fn serialize_node(node: &Node, key: &mut String, out: &mut String) {
    if !node.labels.is_empty() {
        out.push_str(key);
        for label in &node.labels {
            out.push('\t');
            out.push_str(label);
        }
        out.push('\n');
    }

    let mut symbols: Vec<char> = node.children.keys().copied().collect();
    symbols.sort_unstable();
    for ch in symbols {
        key.push(ch);
        serialize_node(&node.children[&ch], key, out);
        key.pop();
    }
}

/// Deserialize a dictionary from its text form.
///
/// Each non-empty line's first field is the key and the remaining fields are
/// labels, added via insertion; a line with a key but no labels inserts
/// nothing. Blank lines are ignored.
pub fn deserialize(text: &str) -> PrefixTrie {
    let mut dict = PrefixTrie::new();
    for line in text.lines() {
        let Some((key, labels)) = line.split_once('\t') else {
            continue;
        };
        for label in labels.split('\t') {
            dict.insert(key, label);
        }
    }
    dict
}

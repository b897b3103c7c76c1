// Common-fragment resolution: pairing candidate labels across the two
// sides of an alignment step.

/// One consumption choice for one side of an alignment step.
///
/// Either a dictionary key (consuming its length in input characters) or a
/// remainder carried over from an earlier step (consuming nothing, emitting
/// only itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Input characters consumed when this candidate is chosen.
    pub consumed: usize,
    /// Pronunciation labels this candidate can emit, in sorted order.
    pub labels: Vec<String>,
}

impl Candidate {
    /// Candidate for a dictionary key with the given label set.
    pub fn key(consumed: usize, labels: Vec<String>) -> Self {
        Self { consumed, labels }
    }

    /// Candidate for a carried-over remainder. The remainder was consumed
    /// from input on an earlier step, so choosing it consumes nothing now.
    pub fn remainder(remainder: &str) -> Self {
        Self {
            consumed: 0,
            labels: vec![remainder.to_string()],
        }
    }
}

/// One resolved way to advance both sides by a shared fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The shared pronunciation fragment merged into the output.
    pub fragment: String,
    /// Latin input characters consumed (0 if that side supplied a remainder).
    pub latin_consumed: usize,
    /// Kana input characters consumed (0 if that side supplied a remainder).
    pub kana_consumed: usize,
    /// Leftover of the latin-side label past the fragment.
    pub latin_remainder: String,
    /// Leftover of the kana-side label past the fragment.
    pub kana_remainder: String,
}

/// Pair every latin-side label with every kana-side label across the full
/// cross product and keep each pair sharing a non-empty literal common
/// prefix. All qualifying pairs are emitted; ambiguity is not pre-filtered.
///
/// Generation order is fixed: latin candidates outer, kana candidates inner,
/// label pairs innermost. The engine's stack discipline makes this order
/// observable in diagnostics, so it must not change.
pub fn resolve(latin: &[Candidate], kana: &[Candidate]) -> Vec<Match> {
    let mut matches = Vec::new();
    for latin_candidate in latin {
        for kana_candidate in kana {
            for latin_label in &latin_candidate.labels {
                for kana_label in &kana_candidate.labels {
                    let common = common_prefix_len(latin_label, kana_label);
                    if common == 0 {
                        continue;
                    }
                    matches.push(Match {
                        fragment: latin_label[..common].to_string(),
                        latin_consumed: latin_candidate.consumed,
                        kana_consumed: kana_candidate.consumed,
                        latin_remainder: latin_label[common..].to_string(),
                        kana_remainder: kana_label[common..].to_string(),
                    });
                }
            }
        }
    }
    matches
}

/// Byte length of the longest common prefix of two strings, always at a
/// character boundary.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_labels_resolve_to_nothing() {
        let latin = [Candidate::key(1, vec!["x".to_string()])];
        let kana = [Candidate::key(1, vec!["y".to_string()])];
        assert!(resolve(&latin, &kana).is_empty());
    }

    #[test]
    fn equal_labels_resolve_without_remainders() {
        let latin = [Candidate::key(2, vec!["ka".to_string()])];
        let kana = [Candidate::key(1, vec!["ka".to_string()])];
        let matches = resolve(&latin, &kana);
        assert_eq!(
            matches,
            [Match {
                fragment: "ka".to_string(),
                latin_consumed: 2,
                kana_consumed: 1,
                latin_remainder: String::new(),
                kana_remainder: String::new(),
            }]
        );
    }

    #[test]
    fn partial_overlap_leaves_remainders() {
        let latin = [Candidate::key(1, vec!["xy".to_string()])];
        let kana = [Candidate::key(1, vec!["x".to_string()])];
        let matches = resolve(&latin, &kana);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fragment, "x");
        assert_eq!(matches[0].latin_remainder, "y");
        assert_eq!(matches[0].kana_remainder, "");
    }

    #[test]
    fn remainder_candidate_consumes_nothing() {
        let latin = [Candidate::remainder("y")];
        let kana = [Candidate::key(1, vec!["y".to_string()])];
        let matches = resolve(&latin, &kana);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].latin_consumed, 0);
        assert_eq!(matches[0].kana_consumed, 1);
        assert_eq!(matches[0].fragment, "y");
    }

    #[test]
    fn full_cross_product_in_generation_order() {
        let latin = [
            Candidate::key(2, vec!["ab".to_string()]),
            Candidate::key(1, vec!["a".to_string(), "ax".to_string()]),
        ];
        let kana = [Candidate::key(1, vec!["a".to_string(), "ab".to_string()])];
        let fragments: Vec<(usize, String)> = resolve(&latin, &kana)
            .into_iter()
            .map(|m| (m.latin_consumed, m.fragment))
            .collect();
        // Latin outer, kana inner, label pairs innermost.
        assert_eq!(
            fragments,
            [
                (2, "a".to_string()),  // "ab" x "a"
                (2, "ab".to_string()), // "ab" x "ab"
                (1, "a".to_string()),  // "a" x "a"
                (1, "a".to_string()),  // "a" x "ab"
                (1, "a".to_string()),  // "ax" x "a"
                (1, "a".to_string()),  // "ax" x "ab"
            ]
        );
    }

    #[test]
    fn common_prefix_respects_char_boundaries() {
        let latin = [Candidate::key(1, vec!["\u{3057}a".to_string()])]; // しa
        let kana = [Candidate::key(1, vec!["\u{3057}b".to_string()])]; // しb
        let matches = resolve(&latin, &kana);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fragment, "\u{3057}");
        assert_eq!(matches[0].latin_remainder, "a");
        assert_eq!(matches[0].kana_remainder, "b");
    }
}

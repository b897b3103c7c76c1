// Alignment engine: backtracking search over two scripts in lock-step.
//
// The search walks both input strings synchronously. At each step it asks
// the matcher for every labeled prefix on each side (or reuses a pending
// remainder), resolves the candidate pairs into matches, queues one search
// state per match on an explicit stack and continues from the most recently
// queued one. A step with no way forward backtracks by popping the stack;
// an exhausted stack fails the search with the farthest-progress diagnostic.

use std::fmt;

use yomi_trie::matcher::match_prefixes;
use yomi_trie::trie::PrefixTrie;

use crate::MAX_ALIGN_STEPS;
use crate::resolver::{Candidate, Match, resolve};

/// Why an alignment step (and ultimately the whole search) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCause {
    /// The latin side had no labeled prefix at its cursor and no remainder.
    NoMatchingLatinPrefix,
    /// The kana side had no labeled prefix at its cursor and no remainder.
    NoMatchingKanaPrefix,
    /// Neither side had a labeled prefix.
    NoMatchingPrefix,
    /// Candidates existed on both sides but no label pair shared a
    /// common prefix.
    PronunciationMismatch,
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoMatchingLatinPrefix => "no matching latin prefix",
            Self::NoMatchingKanaPrefix => "no matching kana prefix",
            Self::NoMatchingPrefix => "no matching latin or kana prefix",
            Self::PronunciationMismatch => "pronunciations don't match",
        })
    }
}

/// Farthest-progress diagnostic for a failed alignment.
///
/// Reports the explored state with the highest combined cursor position
/// across all failed branches -- the most actionable place for an operator
/// patching the dictionaries, independent of exploration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{cause} (latin {latin_cursor}, kana {kana_cursor}, partial {partial:?})")]
pub struct AlignmentFailure {
    /// What stopped the deepest branch.
    pub cause: FailureCause,
    /// Accumulated pronunciation up to the failing step.
    pub partial: String,
    /// Characters of latin input consumed when the branch failed.
    pub latin_cursor: usize,
    /// Characters of kana input consumed when the branch failed.
    pub kana_cursor: usize,
    /// Unconsumed latin-side remainder at the failing step.
    pub latin_remainder: String,
    /// Unconsumed kana-side remainder at the failing step.
    pub kana_remainder: String,
}

impl AlignmentFailure {
    fn cursor_sum(&self) -> usize {
        self.latin_cursor + self.kana_cursor
    }
}

/// Error type for one alignment search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// Every branch of the search failed.
    #[error(transparent)]
    NoAlignment(#[from] AlignmentFailure),

    /// The search was abandoned after [`MAX_ALIGN_STEPS`] steps.
    #[error("alignment abandoned after {0} steps")]
    StepLimitExceeded(u32),
}

/// Immutable snapshot of one search position.
///
/// A non-empty remainder means that side consumed input on an earlier step
/// without fully emitting the label; the remainder is drained on a later
/// step without re-querying the dictionary for that side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct SearchState {
    partial: String,
    latin_cursor: usize,
    kana_cursor: usize,
    latin_remainder: String,
    kana_remainder: String,
}

impl SearchState {
    fn cursor_sum(&self) -> usize {
        self.latin_cursor + self.kana_cursor
    }

    /// Successor state after taking `m`.
    fn advanced(&self, m: &Match) -> Self {
        Self {
            partial: format!("{}{}", self.partial, m.fragment),
            latin_cursor: self.latin_cursor + m.latin_consumed,
            kana_cursor: self.kana_cursor + m.kana_consumed,
            latin_remainder: m.latin_remainder.clone(),
            kana_remainder: m.kana_remainder.clone(),
        }
    }

    fn failure(&self, cause: FailureCause) -> AlignmentFailure {
        AlignmentFailure {
            cause,
            partial: self.partial.clone(),
            latin_cursor: self.latin_cursor,
            kana_cursor: self.kana_cursor,
            latin_remainder: self.latin_remainder.clone(),
            kana_remainder: self.kana_remainder.clone(),
        }
    }
}

/// Outcome of a single alignment step.
enum Step {
    /// Every resolved way to advance from the current state (may be empty).
    Matches(Vec<Match>),
    /// A side had no candidates; backtrack.
    Failed(FailureCause),
}

/// Alignment engine holding read access to the two per-script dictionaries.
///
/// The dictionaries must not be mutated while a search is in flight;
/// mutation belongs between word-pair attempts.
pub struct Aligner<'a> {
    latin_dict: &'a PrefixTrie,
    kana_dict: &'a PrefixTrie,
}

impl<'a> Aligner<'a> {
    /// Create an engine over a latin-side and a kana-side dictionary.
    pub fn new(latin_dict: &'a PrefixTrie, kana_dict: &'a PrefixTrie) -> Self {
        Self {
            latin_dict,
            kana_dict,
        }
    }

    /// Align `latin` against `kana` into one merged pronunciation.
    ///
    /// Exploration is depth-first, most recent alternative first. Success
    /// requires both inputs fully consumed with no leftover remainder;
    /// a side finishing with unresolved remainder fails rather than
    /// truncating. On failure the diagnostic describes the farthest-reached
    /// state across all explored branches, not the last one tried.
    pub fn align(&self, latin: &str, kana: &str) -> Result<String, AlignError> {
        let latin_chars: Vec<char> = latin.chars().collect();
        let kana_chars: Vec<char> = kana.chars().collect();

        let mut alternatives: Vec<SearchState> = Vec::new();
        let mut farthest: Option<AlignmentFailure> = None;
        let mut state = SearchState::default();

        let mut steps: u32 = 0;
        while steps < MAX_ALIGN_STEPS {
            steps += 1;

            if state.latin_cursor == latin_chars.len()
                && state.kana_cursor == kana_chars.len()
                && state.latin_remainder.is_empty()
                && state.kana_remainder.is_empty()
            {
                return Ok(state.partial);
            }

            let cause = match self.step(&state, &latin_chars, &kana_chars) {
                Step::Matches(matches) => match matches.split_last() {
                    Some((next, queued)) => {
                        // Queue the earlier matches as alternatives and
                        // continue from the most recent one.
                        for m in queued {
                            alternatives.push(state.advanced(m));
                        }
                        state = state.advanced(next);
                        continue;
                    }
                    None => FailureCause::PronunciationMismatch,
                },
                Step::Failed(cause) => cause,
            };

            // Step failure: remember the deepest failing state, then
            // backtrack to the most recently queued alternative.
            let failure = state.failure(cause);
            let best = match farthest.take() {
                Some(previous) if previous.cursor_sum() >= failure.cursor_sum() => previous,
                _ => failure,
            };
            match alternatives.pop() {
                Some(next) => {
                    farthest = Some(best);
                    state = next;
                }
                None => return Err(AlignError::NoAlignment(best)),
            }
        }

        Err(AlignError::StepLimitExceeded(steps))
    }

    /// Resolve every way to advance from `state`, or report which side
    /// blocked.
    fn step(&self, state: &SearchState, latin: &[char], kana: &[char]) -> Step {
        let latin_candidates = side_candidates(
            &state.latin_remainder,
            &latin[state.latin_cursor..],
            self.latin_dict,
        );
        let kana_candidates = side_candidates(
            &state.kana_remainder,
            &kana[state.kana_cursor..],
            self.kana_dict,
        );

        match (latin_candidates.is_empty(), kana_candidates.is_empty()) {
            (true, true) => Step::Failed(FailureCause::NoMatchingPrefix),
            (true, false) => Step::Failed(FailureCause::NoMatchingLatinPrefix),
            (false, true) => Step::Failed(FailureCause::NoMatchingKanaPrefix),
            (false, false) => Step::Matches(resolve(&latin_candidates, &kana_candidates)),
        }
    }
}

/// Candidates for one side of a step: the pending remainder if there is
/// one, otherwise every labeled prefix of the unconsumed input.
fn side_candidates(remainder: &str, rest: &[char], dict: &PrefixTrie) -> Vec<Candidate> {
    if !remainder.is_empty() {
        return vec![Candidate::remainder(remainder)];
    }
    match_prefixes(rest, dict)
        .into_iter()
        .filter_map(|key| {
            // match_prefixes only returns labeled keys.
            let labels = dict.lookup(&key).ok()?;
            Some(Candidate::key(
                key.chars().count(),
                labels.iter().cloned().collect(),
            ))
        })
        .collect()
}

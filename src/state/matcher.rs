//! Query matching and best-candidate selection (pure).
//!
//! A candidate matches when the query is a literal, case-sensitive substring
//! of its name. The empty query matches everything.
//!
//! Selection, in priority order:
//! 1. A name exactly equal to the query wins. A previous selection that is
//!    itself exact is kept, otherwise the first exact match in index order.
//! 2. The previous selection is kept while it still matches (sticky).
//! 3. The first match in index order.
//! 4. Nothing matches: no selection.

use crate::index::CandidateIndex;
use crate::model::{Candidate, CandidateId};

/// Result of matching a query against the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Number of candidates whose name contains the query.
    pub count: usize,
    /// The best candidate, `None` iff `count == 0`.
    pub selected: Option<CandidateId>,
}

/// Whether `candidate` matches `query`.
pub fn is_match(candidate: &Candidate, query: &str) -> bool {
    candidate.name().contains(query)
}

/// Matching candidates in index order.
pub fn matches<'a>(
    index: &'a CandidateIndex,
    query: &'a str,
) -> impl Iterator<Item = (CandidateId, &'a Candidate)> + 'a {
    index
        .iter()
        .filter(move |(_, candidate)| is_match(candidate, query))
}

/// Count matches for `query` and pick the candidate to launch.
///
/// `previous` is the selection before the query changed; see the module docs
/// for how it influences the result. One pass over the index.
pub fn match_query(
    index: &CandidateIndex,
    query: &str,
    previous: Option<CandidateId>,
) -> MatchOutcome {
    let previous = previous.and_then(|id| index.get(id).map(|candidate| (id, candidate)));

    // An exact previous selection stays put, even among duplicate names
    if let Some((id, candidate)) = previous {
        if candidate.name() == query {
            return MatchOutcome {
                count: matches(index, query).count(),
                selected: Some(id),
            };
        }
    }

    let mut count = 0;
    let mut first_match = None;
    let mut first_exact = None;

    for (id, candidate) in matches(index, query) {
        count += 1;
        first_match.get_or_insert(id);
        if first_exact.is_none() && candidate.name() == query {
            first_exact = Some(id);
        }
    }

    let sticky = previous
        .filter(|(_, candidate)| is_match(candidate, query))
        .map(|(id, _)| id);

    MatchOutcome {
        count,
        selected: first_exact.or(sticky).or(first_match),
    }
}

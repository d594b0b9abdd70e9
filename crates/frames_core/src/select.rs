use crate::{FilterRules, RunState, SearchResult};

/// The two phases of candidate selection for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPass {
    /// Only results passing the suitability gate.
    Strict,
    /// Any result with an unseen URL; runs only when the strict pass found nothing.
    Permissive,
}

impl SelectionPass {
    /// Number of results requested per query in this pass.
    pub fn result_count(self) -> u8 {
        match self {
            SelectionPass::Strict => 10,
            SelectionPass::Permissive => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub url: String,
    pub query: String,
    pub pass: SelectionPass,
}

/// Picks the candidate for one query's results under the given pass.
pub fn pick_candidate<'a>(
    pass: SelectionPass,
    results: &'a [SearchResult],
    rules: &FilterRules,
    state: &RunState,
) -> Option<&'a SearchResult> {
    results.iter().find(|result| {
        let unseen = !result.url.is_empty() && !state.has_url(&result.url);
        match pass {
            SelectionPass::Strict => unseen && rules.accepts(result),
            SelectionPass::Permissive => unseen,
        }
    })
}

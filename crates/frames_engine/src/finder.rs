use std::time::Duration;

use frames_core::{
    pick_candidate, CatalogEntry, FilterRules, RunState, SearchResult, Selection, SelectionPass,
    Stage,
};
use frames_logging::{frames_info, frames_warn};

use crate::ImageSearch;

/// Chooses a source URL for one catalog entry.
///
/// Strict pass: queries in order, first suitable unseen result wins, with
/// `query_delay` after every query that produced nothing. Permissive pass
/// (only if the strict pass found nothing): the same queries again, first
/// unseen result wins regardless of suitability.
///
/// `on_stage` hears `Searching` before each query and `Filtering` before its
/// results are screened.
pub async fn find_best_image(
    search: &dyn ImageSearch,
    rules: &FilterRules,
    entry: &CatalogEntry,
    state: &RunState,
    query_delay: Duration,
    on_stage: &(dyn Fn(Stage) + Sync),
) -> Option<Selection> {
    for query in &entry.queries {
        frames_info!("Searching images: {}", query);
        on_stage(Stage::Searching);
        let results = search_or_empty(search, query, SelectionPass::Strict).await;
        on_stage(Stage::Filtering);
        if let Some(hit) = pick_candidate(SelectionPass::Strict, &results, rules, state) {
            return Some(selection(hit, query, SelectionPass::Strict));
        }
        if !query_delay.is_zero() {
            tokio::time::sleep(query_delay).await;
        }
    }

    frames_info!(
        "No suitable results for {}/{}, trying first available",
        entry.category,
        entry.subcategory
    );
    for query in &entry.queries {
        on_stage(Stage::Searching);
        let results = search_or_empty(search, query, SelectionPass::Permissive).await;
        on_stage(Stage::Filtering);
        if let Some(hit) = pick_candidate(SelectionPass::Permissive, &results, rules, state) {
            frames_warn!(
                "Using unfiltered result for {}/{}: {:?} from {}",
                entry.category,
                entry.subcategory,
                hit.title,
                hit.source_domain
            );
            return Some(selection(hit, query, SelectionPass::Permissive));
        }
    }

    None
}

async fn search_or_empty(
    search: &dyn ImageSearch,
    query: &str,
    pass: SelectionPass,
) -> Vec<SearchResult> {
    match search.search(query, pass.result_count()).await {
        Ok(results) => results,
        Err(err) => {
            frames_warn!("Image search failed for {:?}: {}", query, err);
            Vec::new()
        }
    }
}

fn selection(hit: &SearchResult, query: &str, pass: SelectionPass) -> Selection {
    Selection {
        url: hit.url.clone(),
        query: query.to_string(),
        pass,
    }
}

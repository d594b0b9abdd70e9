use std::fmt::Write as _;

use frames_core::RunSummary;

const RULE_WIDTH: usize = 50;

pub fn banner() -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Frame Harvester {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(text, "{}", "=".repeat(RULE_WIDTH));
    text.push_str("  * Creative Commons licensed images only\n");
    text.push_str("  * Google Custom Search API, image mode\n");
    text.push_str("  * Product photography focus, people filtered out\n");
    text.push_str("  * Duplicate URL and content detection\n");
    text
}

pub fn credential_instructions(missing: &[&str]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Search credentials not found: {}", missing.join(", "));
    text.push_str("\nSetup:\n");
    text.push_str("1. Create a Custom Search Engine: https://cse.google.com/cse/\n");
    text.push_str("   - enable 'Image Search' and 'Search the entire web'\n");
    text.push_str("2. Get an API key: https://console.developers.google.com/apis/credentials\n");
    text.push_str("   - enable 'Custom Search API'\n");
    text.push_str("3. Set environment variables:\n");
    text.push_str("   export GOOGLE_API_KEY='your_api_key_here'\n");
    text.push_str("   export GOOGLE_CSE_ID='your_search_engine_id_here'\n");
    text.push_str("\nThe Custom Search API allows 100 free queries per day.\n");
    text
}

/// The end-of-run block: totals, per-category coverage and what to do next.
pub fn render_summary(summary: &RunSummary) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "\nDownload process completed.");
    let _ = writeln!(
        text,
        "Saved this run: {}, failed: {}",
        summary.saved(),
        summary.failed()
    );
    let _ = writeln!(text, "\nDOWNLOAD SUMMARY");
    let _ = writeln!(text, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(text, "{summary}");

    if summary.is_complete() {
        text.push_str("\nAll images present.\n");
        text.push_str("Every image is Creative Commons licensed, 800x800, JPEG quality 95.\n");
    } else {
        text.push_str("\nNext steps:\n");
        text.push_str("1. Check your search API credentials and daily quota\n");
        text.push_str("2. Verify your Custom Search Engine settings\n");
        text.push_str("3. Rerun to retry the missing entries, or add them by hand\n");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use frames_core::{Catalog, CatalogEntry, EntryStatus};

    fn catalog() -> Catalog {
        let entry = |category: &str, subcategory: &str| CatalogEntry {
            category: category.into(),
            subcategory: subcategory.into(),
            queries: vec!["q".into()],
        };
        Catalog::from_entries(vec![entry("oval", "a"), entry("oval", "b"), entry("round", "c")])
            .unwrap()
    }

    #[test]
    fn incomplete_run_lists_next_steps() {
        let catalog = catalog();
        let mut summary = RunSummary::for_catalog(&catalog);
        let entries = catalog.entries();
        summary.record(&entries[0], EntryStatus::Saved);
        summary.record(&entries[1], EntryStatus::Failed);
        summary.record(&entries[2], EntryStatus::SkippedExisting);

        let text = render_summary(&summary);
        assert!(text.contains("Saved this run: 1, failed: 1"));
        assert!(text.contains("Oval: 1/2 images"));
        assert!(text.contains("Round: 1/1 images"));
        assert!(text.contains("Total: 2/3 images"));
        assert!(text.contains("Next steps:"));
        assert!(!text.contains("All images present"));
    }

    #[test]
    fn complete_run_says_so() {
        let catalog = catalog();
        let mut summary = RunSummary::for_catalog(&catalog);
        for entry in catalog.entries() {
            summary.record(entry, EntryStatus::SkippedExisting);
        }
        let text = render_summary(&summary);
        assert!(text.contains("Total: 3/3 images"));
        assert!(text.contains("All images present."));
        assert!(!text.contains("Next steps"));
    }

    #[test]
    fn instructions_name_the_missing_variables() {
        let text = credential_instructions(&["GOOGLE_CSE_ID"]);
        assert!(text.starts_with("Search credentials not found: GOOGLE_CSE_ID"));
        assert!(text.contains("export GOOGLE_API_KEY="));
    }
}

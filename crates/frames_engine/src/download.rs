use frames_core::RunState;

use crate::{content_hash, FailureKind, FetchError, FetchOutput, Fetcher};

/// Raw bytes of a candidate that passed transport, content-type and duplicate checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub output: FetchOutput,
    pub hash: String,
}

/// Downloads `url` unless it, or its content, was already saved this run.
///
/// Run state is only read here; the caller records the URL and hash once the
/// artifact has actually been written.
pub async fn fetch_candidate(
    fetcher: &dyn Fetcher,
    url: &str,
    state: &RunState,
) -> Result<FetchedImage, FetchError> {
    if state.has_url(url) {
        return Err(FetchError::new(FailureKind::DuplicateUrl, url));
    }

    let output = fetcher.fetch(url).await?;
    let hash = content_hash(&output.bytes);
    if state.has_hash(&hash) {
        return Err(FetchError::new(FailureKind::DuplicateContent, hash));
    }

    Ok(FetchedImage { output, hash })
}

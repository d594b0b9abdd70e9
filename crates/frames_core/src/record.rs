/// One image hit returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub snippet: String,
    /// Host the image is shown on, e.g. `www.shutterstock.com`.
    pub source_domain: String,
    pub mime: String,
    pub image: ImageMeta,
}

/// Size metadata reported by the search API; any field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageMeta {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub byte_size: Option<u64>,
    pub context_link: Option<String>,
}

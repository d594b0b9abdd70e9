use crate::SearchResult;

const POSITIVE_KEYWORDS: &[&str] = &[
    "glasses",
    "eyeglasses",
    "eyewear",
    "spectacles",
    "frames",
    "product",
    "isolated",
    "white background",
    "studio",
];

// People and lifestyle shots.
const NEGATIVE_KEYWORDS: &[&str] = &[
    "person wearing",
    "man wearing",
    "woman wearing",
    "people",
    "portrait",
    "face",
    "model",
    "human",
    "wearing glasses",
    "lifestyle",
    "fashion model",
    "person with glasses",
];

// Stock photo sites and eyewear retailers.
const PREFERRED_DOMAINS: &[&str] = &[
    "shutterstock",
    "istockphoto",
    "getty",
    "alamy",
    "dreamstime",
    "warbyparker",
    "zenni",
    "eyebuydirect",
    "lenscrafters",
    "rayban",
    "oakley",
    "persol",
];

/// Keyword tables for the suitability gate. All entries are lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
    pub preferred_domains: Vec<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            positive_keywords: to_owned_list(POSITIVE_KEYWORDS),
            negative_keywords: to_owned_list(NEGATIVE_KEYWORDS),
            preferred_domains: to_owned_list(PREFERRED_DOMAINS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suitability {
    pub positive_score: usize,
    pub negative_score: usize,
    pub domain_bonus: usize,
}

impl Suitability {
    pub fn is_accepted(&self) -> bool {
        self.positive_score + self.domain_bonus > 0 && self.negative_score == 0
    }
}

impl FilterRules {
    pub fn score(&self, result: &SearchResult) -> Suitability {
        let text = format!("{} {}", result.title, result.snippet).to_lowercase();
        let domain = result.source_domain.to_lowercase();

        let positive_score = count_matches(&self.positive_keywords, &text);
        let negative_score = count_matches(&self.negative_keywords, &text);
        let domain_bonus = usize::from(
            self.preferred_domains
                .iter()
                .any(|preferred| domain.contains(preferred.as_str())),
        );

        Suitability {
            positive_score,
            negative_score,
            domain_bonus,
        }
    }

    pub fn accepts(&self, result: &SearchResult) -> bool {
        self.score(result).is_accepted()
    }
}

fn count_matches(keywords: &[String], text: &str) -> usize {
    keywords
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .count()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

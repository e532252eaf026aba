use serde::Deserialize;

/// Optional filters accepted by the recommender
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RecommendQuery {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub actor: Option<String>,
    pub platform: Option<String>,
    pub content_rating: Option<String>,
}

impl RecommendQuery {
    /// Lowercased free-text query built from the text filters
    ///
    /// The year never takes part in the text; it is only used as a post-filter.
    pub fn text(&self) -> String {
        [
            &self.genre,
            &self.actor,
            &self.platform,
            &self.content_rating,
        ]
        .iter()
        .map(|field| field.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_lowercase()
    }
}

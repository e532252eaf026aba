use serde::{Deserialize, Serialize};

/// One catalog row as it appears in the CSV file
///
/// Every column is optional text; typed interpretation happens in the
/// conversion to [`Drama`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Main Cast", default)]
    pub main_cast: Option<String>,
    #[serde(rename = "Network", default)]
    pub network: Option<String>,
    #[serde(rename = "Content Rating", default)]
    pub content_rating: Option<String>,
    #[serde(rename = "Sinopsis", default)]
    pub synopsis: Option<String>,
    #[serde(rename = "Score", default)]
    pub score: Option<String>,
    #[serde(rename = "img url", default)]
    pub image_url: Option<String>,
}

/// A drama title in the catalog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drama {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub main_cast: Option<String>,
    pub network: Option<String>,
    pub content_rating: Option<String>,
    pub synopsis: Option<String>,
    pub score: Option<f64>,
    pub image_url: Option<String>,
}

impl Drama {
    /// Lowercased searchable text built from genre, cast, network and rating
    pub fn combined_text(&self) -> String {
        [
            &self.genre,
            &self.main_cast,
            &self.network,
            &self.content_rating,
        ]
        .iter()
        .map(|field| text_or_empty(field))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

impl From<CatalogRow> for Drama {
    fn from(row: CatalogRow) -> Self {
        Drama {
            name: row.name,
            year: row.year.as_deref().and_then(parse_year),
            genre: row.genre,
            main_cast: row.main_cast,
            network: row.network,
            content_rating: row.content_rating,
            synopsis: row.synopsis,
            score: row.score.as_deref().and_then(parse_score),
            image_url: row.image_url,
        }
    }
}

/// Recommendation payload returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DramaResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Main Cast")]
    pub main_cast: String,
    #[serde(rename = "Content Rating")]
    pub content_rating: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Synopsis")]
    pub synopsis: String,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
    #[serde(rename = "Image URL")]
    pub image_url: String,
}

impl From<&Drama> for DramaResponse {
    fn from(drama: &Drama) -> Self {
        Self {
            name: text_or_empty(&drama.name).to_string(),
            year: drama.year,
            genre: text_or_empty(&drama.genre).to_string(),
            main_cast: text_or_empty(&drama.main_cast).to_string(),
            content_rating: text_or_empty(&drama.content_rating).to_string(),
            platform: text_or_empty(&drama.network).to_string(),
            synopsis: text_or_empty(&drama.synopsis).to_string(),
            score: drama.score.filter(|s| s.is_finite()),
            image_url: text_or_empty(&drama.image_url).to_string(),
        }
    }
}

fn text_or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// Accepts `2019` as well as the float form `2019.0` some exports produce
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|s| s.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crash_landing_row() -> CatalogRow {
        CatalogRow {
            name: Some("Crash Landing on You".to_string()),
            year: Some("2019".to_string()),
            genre: Some("Romance".to_string()),
            main_cast: Some("Hyun Bin".to_string()),
            network: Some("tvN".to_string()),
            content_rating: Some("15+".to_string()),
            synopsis: Some("A paragliding mishap".to_string()),
            score: Some("9.1".to_string()),
            image_url: Some("https://img.example/cloy.jpg".to_string()),
        }
    }

    #[test]
    fn test_combined_text_is_lowercased_and_space_joined() {
        let drama: Drama = crash_landing_row().into();
        assert_eq!(drama.combined_text(), "romance hyun bin tvn 15+");
    }

    #[test]
    fn test_combined_text_treats_missing_fields_as_empty() {
        let drama = Drama {
            genre: Some("Thriller".to_string()),
            network: Some("Netflix".to_string()),
            ..Default::default()
        };
        assert_eq!(drama.combined_text(), "thriller  netflix ");
    }

    #[test]
    fn test_year_parsing_accepts_float_form() {
        assert_eq!(parse_year("2021"), Some(2021));
        assert_eq!(parse_year(" 2021.0 "), Some(2021));
        assert_eq!(parse_year("2021.5"), None);
        assert_eq!(parse_year("NaN"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_score_parsing_rejects_nan() {
        assert_eq!(parse_score("8.7"), Some(8.7));
        assert_eq!(parse_score("nan"), None);
        assert_eq!(parse_score("unrated"), None);
    }

    #[test]
    fn test_whitespace_text_cells_are_kept_verbatim() {
        let row = CatalogRow {
            name: Some("   ".to_string()),
            ..crash_landing_row()
        };
        let drama: Drama = row.into();
        assert_eq!(drama.name.as_deref(), Some("   "));
        assert_eq!(DramaResponse::from(&drama).name, "   ");
    }

    #[test]
    fn test_response_uses_external_field_names() {
        let drama: Drama = crash_landing_row().into();
        let json = serde_json::to_value(DramaResponse::from(&drama)).unwrap();

        assert_eq!(json["Name"], "Crash Landing on You");
        assert_eq!(json["Year"], 2019);
        assert_eq!(json["Platform"], "tvN");
        assert_eq!(json["Main Cast"], "Hyun Bin");
        assert_eq!(json["Content Rating"], "15+");
        assert_eq!(json["Score"], 9.1);
        assert_eq!(json["Image URL"], "https://img.example/cloy.jpg");
    }

    #[test]
    fn test_response_nulls_missing_numbers_and_empties_missing_text() {
        let drama = Drama {
            name: Some("Untitled".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(DramaResponse::from(&drama)).unwrap();

        assert!(json["Year"].is_null());
        assert!(json["Score"].is_null());
        assert_eq!(json["Synopsis"], "");
    }
}

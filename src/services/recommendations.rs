use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{Drama, RecommendQuery},
    services::vectorizer::TfidfVectorizer,
};

/// A catalog record paired with its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDrama<'a> {
    pub drama: &'a Drama,
    pub similarity: f64,
}

/// Picks the single catalog drama that best matches the query
///
/// The TF-IDF space is fit over the combined text of the whole catalog on
/// every call and the query is projected into that same space. Records are
/// ranked by cosine similarity, then the year filter (if any) is applied to
/// the ranked list. Ranking happens before the year filter, so the result is
/// the best-scoring record of that year, not a ranking of that year alone.
///
/// Returns `InvalidQuery` when no text filter is given (a year alone is not
/// enough) and `NoMatch` when the year filter discards every record.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    query: &RecommendQuery,
) -> AppResult<ScoredDrama<'a>> {
    // 1. Build the query text
    let query_text = query.text();
    if query_text.is_empty() {
        return Err(AppError::invalid_query());
    }

    // 2. Rank every record by similarity
    let ranked = rank(catalog, &query_text);

    // 3. Year post-filter over the ranked list; year 0 means no filter
    let year = query.year.filter(|&y| y != 0);
    let best = ranked
        .into_iter()
        .find(|scored| year.map_or(true, |year| scored.drama.year == Some(year)));

    match best {
        Some(scored) => {
            tracing::debug!(
                name = scored.drama.name.as_deref().unwrap_or(""),
                similarity = scored.similarity,
                "Recommendation selected"
            );
            Ok(scored)
        }
        None => {
            tracing::debug!(year = ?year, "Year filter left no candidates");
            Err(AppError::no_match())
        }
    }
}

/// Scores every catalog record against `query_text`, best first
///
/// Sorting is stable, so equally scored records keep catalog order.
pub fn rank<'a>(catalog: &'a Catalog, query_text: &str) -> Vec<ScoredDrama<'a>> {
    let combined: Vec<String> = catalog.dramas().iter().map(Drama::combined_text).collect();

    let (vectorizer, doc_vectors) = TfidfVectorizer::fit_transform(&combined);
    let query_vector = vectorizer.transform(query_text);

    let mut ranked: Vec<ScoredDrama<'a>> = catalog
        .dramas()
        .iter()
        .zip(doc_vectors.iter())
        .map(|(drama, doc_vector)| ScoredDrama {
            drama,
            similarity: query_vector.cosine(doc_vector),
        })
        .collect();
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    tracing::debug!(
        vocabulary = vectorizer.vocabulary_len(),
        candidates = ranked.len(),
        top_similarity = ranked.first().map(|s| s.similarity).unwrap_or(0.0),
        "Catalog ranked"
    );

    ranked
}

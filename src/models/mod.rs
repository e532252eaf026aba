mod drama;
mod query;

pub use drama::{CatalogRow, Drama, DramaResponse};
pub use query::RecommendQuery;

pub mod recommendations;
pub mod vectorizer;

pub use recommendations::{rank, recommend, ScoredDrama};
pub use vectorizer::{SparseVector, TfidfVectorizer};

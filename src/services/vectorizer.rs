use linfa_preprocessing::{tf_idf_vectorization::TfIdfMethod, CountVectorizer};
use ndarray::Array1;

/// L2-normalized sparse vector, entries sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Cosine similarity between two normalized vectors
    ///
    /// A zero vector on either side yields 0.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0f64;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }
}

/// TF-IDF model fit over a corpus of documents
///
/// Tokenizing and term counting go through linfa's `CountVectorizer`
/// (lowercased `\b\w\w+\b` tokens). Weights are raw counts times the smoothed
/// IDF `ln((1 + n) / (1 + df)) + 1` of the fitted corpus, L2-normalized, so
/// document and query vectors live in one space.
pub struct TfidfVectorizer {
    counter: Option<CountVectorizer>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits vocabulary and IDF weights over `documents`
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        Self::fit_transform(documents).0
    }

    /// Fits the model and returns it together with the corpus vectors
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
        let corpus: Array1<String> = documents.iter().map(|d| d.as_ref().to_string()).collect();
        let empty = || {
            (
                Self::empty(),
                vec![SparseVector::default(); documents.len()],
            )
        };

        let Some(counter) = fit_counter(&corpus) else {
            return empty();
        };
        let counts = counter.transform(&corpus);

        let mut df = vec![0usize; counter.nentries()];
        let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); documents.len()];
        for (&count, (row, col)) in counts.iter() {
            if count > 0 {
                df[col] += 1;
                rows[row].push((col, count as f64));
            }
        }

        let idf = df
            .into_iter()
            .map(|df_t| TfIdfMethod::Smooth.compute_idf(documents.len(), df_t))
            .collect();

        let vectorizer = Self {
            counter: Some(counter),
            idf,
        };
        let vectors = rows.into_iter().map(|row| vectorizer.weigh(row)).collect();
        (vectorizer, vectors)
    }

    /// Projects text into the fitted space; unknown terms are ignored
    pub fn transform(&self, text: &str) -> SparseVector {
        let Some(counter) = &self.counter else {
            return SparseVector::default();
        };

        let input = Array1::from(vec![text.to_string()]);
        let counts = counter.transform(&input);
        self.weigh(
            counts
                .iter()
                .filter_map(|(&count, (_, col))| (count > 0).then(|| (col, count as f64)))
                .collect(),
        )
    }

    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    #[cfg(test)]
    fn idf(&self, term: &str) -> Option<f64> {
        let counter = self.counter.as_ref()?;
        let idx = counter.vocabulary().iter().position(|t| t == term)?;
        Some(self.idf[idx])
    }

    fn empty() -> Self {
        Self {
            counter: None,
            idf: Vec::new(),
        }
    }

    /// Applies IDF weights to raw counts and L2-normalizes
    fn weigh(&self, counts: Vec<(usize, f64)>) -> SparseVector {
        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        entries.sort_unstable_by_key(|(idx, _)| *idx);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in entries.iter_mut() {
                *w /= norm;
            }
        }

        SparseVector { entries }
    }
}

/// Fits the term counter; a corpus without any usable token has no vocabulary
fn fit_counter(corpus: &Array1<String>) -> Option<CountVectorizer> {
    if corpus.is_empty() {
        return None;
    }
    match CountVectorizer::params().fit(corpus) {
        Ok(counter) if counter.nentries() > 0 => Some(counter),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "Corpus produced no vocabulary");
            None
        }
    }
}

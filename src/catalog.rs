use std::io::Read;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogRow, Drama},
};

/// Immutable drama catalog loaded once at startup
///
/// Records keep their file order, which is also the tie-break order when
/// several records score the same.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dramas: Vec<Drama>,
}

impl Catalog {
    /// Builds a catalog from already-parsed records
    pub fn new(dramas: Vec<Drama>) -> Self {
        Self { dramas }
    }

    /// Loads the catalog from a CSV file
    ///
    /// Fails when the file is missing, is not valid CSV, or holds no records.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| AppError::Catalog(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Loads the catalog from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let dramas = csv_reader
            .deserialize::<CatalogRow>()
            .map(|row| row.map(Drama::from))
            .collect::<Result<Vec<_>, _>>()?;

        if dramas.is_empty() {
            return Err(AppError::Catalog("catalog contains no records".to_string()));
        }

        Ok(Self { dramas })
    }

    pub fn dramas(&self) -> &[Drama] {
        &self.dramas
    }

    pub fn len(&self) -> usize {
        self.dramas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dramas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Name,Year,Genre,Main Cast,Network,Content Rating,Sinopsis,Score,img url\n";

    #[test]
    fn test_from_reader_parses_rows_in_order() {
        let data = format!(
            "{HEADER}\
             Crash Landing on You,2019,Romance,\"Hyun Bin, Son Ye-jin\",tvN,15+,A paraglider lands north,9.1,https://img.example/1.jpg\n\
             Kingdom,2019.0,Thriller,Ju Ji-hoon,Netflix,18+,Zombies in Joseon,8.6,https://img.example/2.jpg\n"
        );

        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog.dramas()[0];
        assert_eq!(first.name.as_deref(), Some("Crash Landing on You"));
        assert_eq!(first.main_cast.as_deref(), Some("Hyun Bin, Son Ye-jin"));
        assert_eq!(first.year, Some(2019));

        let second = &catalog.dramas()[1];
        assert_eq!(second.year, Some(2019));
        assert_eq!(second.network.as_deref(), Some("Netflix"));
    }

    #[test]
    fn test_empty_cells_become_absent() {
        let data = format!("{HEADER}Mystery Title,,,,,,,,\n");

        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        let drama = &catalog.dramas()[0];
        assert_eq!(drama.year, None);
        assert_eq!(drama.score, None);
        assert_eq!(drama.genre, None);
    }

    #[test]
    fn test_header_only_file_is_rejected() {
        let result = Catalog::from_reader(HEADER.as_bytes());
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let data = format!("{HEADER}Too,Few,Columns\n");
        let result = Catalog::from_reader(data.as_bytes());
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{HEADER}Move to Heaven,2021,Drama,Lee Je-hoon,Netflix,18+,Trauma cleaners,9.2,\n"
        )
        .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.dramas()[0].image_url, None);
    }

    #[test]
    fn test_missing_file_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_path(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}

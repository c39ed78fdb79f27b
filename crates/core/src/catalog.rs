//! The static review collection.
//!
//! Reviews are copied from the upstream platform into a JSON file that ships
//! with the deployment; the collection is fixed and not editable at runtime.
//! The catalog loads that file once at startup and serves lookups from
//! memory.

use crate::config::CoreConfig;
use crate::error::{ReviewError, ReviewResult};
use crate::review::ReviewRecord;
use std::fs;

/// In-memory catalog of the curated review records.
#[derive(Debug, Clone)]
pub struct ReviewCatalog {
    reviews: Vec<ReviewRecord>,
}

impl ReviewCatalog {
    /// Loads the review collection from the path configured in `cfg`.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::FileRead` if the file cannot be read and
    /// `ReviewError::Deserialization` if it is not a valid JSON array of
    /// review records.
    pub fn load(cfg: &CoreConfig) -> ReviewResult<Self> {
        let contents = fs::read_to_string(cfg.reviews_path()).map_err(ReviewError::FileRead)?;
        let reviews: Vec<ReviewRecord> =
            serde_json::from_str(&contents).map_err(ReviewError::Deserialization)?;

        tracing::info!(
            count = reviews.len(),
            path = %cfg.reviews_path().display(),
            "loaded review collection"
        );

        Ok(Self { reviews })
    }

    /// Builds a catalog from records already in memory.
    pub fn from_records(reviews: Vec<ReviewRecord>) -> Self {
        Self { reviews }
    }

    /// All records, in collection order.
    pub fn list(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    /// Looks up one record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::UnknownReview` when no record carries `id`.
    pub fn get(&self, id: u32) -> ReviewResult<&ReviewRecord> {
        self.reviews
            .iter()
            .find(|r| r.id == id)
            .ok_or(ReviewError::UnknownReview(id))
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"[
            {
                "id": 1,
                "author": "Ирина В.",
                "date": "12 января 2024",
                "clinic": "Клиника Х",
                "fullText": "История пациента Болело ухо. Понравилось Внимание.",
                "rating": 5,
                "sourceUrl": "https://example.org/reviews/1"
            },
            {
                "id": 2,
                "author": "Павел С.",
                "date": "3 марта 2024",
                "clinic": "Клиника Х",
                "fullText": "Всё понравилось, спасибо.",
                "rating": 5,
                "sourceUrl": "https://example.org/reviews/2"
            }
        ]"#
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let cfg = CoreConfig::new(path).unwrap();
        let catalog = ReviewCatalog::load(&cfg).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list()[0].author, "Ирина В.");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CoreConfig::new(dir.path().join("absent.json")).unwrap();
        let result = ReviewCatalog::load(&cfg);
        assert!(matches!(result, Err(ReviewError::FileRead(_))));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        fs::write(&path, "{ not a review list").unwrap();

        let cfg = CoreConfig::new(path).unwrap();
        let result = ReviewCatalog::load(&cfg);
        assert!(matches!(result, Err(ReviewError::Deserialization(_))));
    }

    #[test]
    fn test_get_by_id() {
        let records: Vec<ReviewRecord> = serde_json::from_str(sample_json()).unwrap();
        let catalog = ReviewCatalog::from_records(records);

        assert_eq!(catalog.get(2).unwrap().author, "Павел С.");
        assert!(matches!(
            catalog.get(99),
            Err(ReviewError::UnknownReview(99))
        ));
    }
}

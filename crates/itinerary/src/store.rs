use std::path::{Path, PathBuf};

use crate::model::{DayRecord, Language, RouteOption};
use crate::normalize::normalize_days;

/// Per-dataset load outcome. Callers decide fallback policy from the
/// variant instead of catching errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Ready(Vec<DayRecord>),
    Missing,
    Failed,
}

impl Dataset {
    pub fn days(&self) -> Option<&[DayRecord]> {
        match self {
            Dataset::Ready(days) => Some(days),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Dataset::Ready(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("required dataset {path} could not be read: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("required dataset {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// All four itinerary datasets, populated once at startup and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryStore {
    option1_en: Dataset,
    option1_de: Dataset,
    option2_en: Dataset,
    option2_de: Dataset,
}

impl ItineraryStore {
    pub fn new(
        option1_en: Dataset,
        option1_de: Dataset,
        option2_en: Dataset,
        option2_de: Dataset,
    ) -> Self {
        Self {
            option1_en,
            option1_de,
            option2_en,
            option2_de,
        }
    }

    pub fn dataset(&self, option: RouteOption, language: Language) -> &Dataset {
        match (option, language) {
            (RouteOption::Option1, Language::En) => &self.option1_en,
            (RouteOption::Option1, Language::De) => &self.option1_de,
            (RouteOption::Option2, Language::En) => &self.option2_en,
            (RouteOption::Option2, Language::De) => &self.option2_de,
        }
    }

    /// Resolve the records for the active option and language. A German
    /// request without a ready German dataset silently falls back to
    /// English; this is never an error.
    pub fn current_days(&self, option: RouteOption, language: Language) -> &[DayRecord] {
        if language == Language::De
            && let Some(days) = self.dataset(option, Language::De).days()
        {
            return days;
        }

        self.dataset(option, Language::En).days().unwrap_or(&[])
    }

    /// At least one dataset rendered; the readiness probe gate.
    pub fn has_ready(&self) -> bool {
        [
            &self.option1_en,
            &self.option1_de,
            &self.option2_en,
            &self.option2_de,
        ]
        .into_iter()
        .any(Dataset::is_ready)
    }
}

/// Reads the itinerary files from a data directory. English datasets are
/// required and abort the load on failure; German variants degrade to
/// [`Dataset::Missing`] or [`Dataset::Failed`] with a warning.
#[derive(Debug, Clone)]
pub struct DataLoader {
    base: PathBuf,
}

impl DataLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub async fn load(&self) -> Result<ItineraryStore, LoadError> {
        let (option1_en, option2_en, option1_de, option2_de) = futures::join!(
            self.required(RouteOption::Option1),
            self.required(RouteOption::Option2),
            self.optional(RouteOption::Option1),
            self.optional(RouteOption::Option2),
        );

        Ok(ItineraryStore::new(
            Dataset::Ready(option1_en?),
            option1_de,
            Dataset::Ready(option2_en?),
            option2_de,
        ))
    }

    async fn required(&self, option: RouteOption) -> Result<Vec<DayRecord>, LoadError> {
        let path = self.path_for(option, Language::En);
        let bytes = tokio::fs::read(&path).await.map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "required dataset unreadable");
            LoadError::Read {
                path: path.clone(),
                source,
            }
        })?;

        let raw: serde_json::Value = serde_json::from_slice(&bytes).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "required dataset unparsable");
            LoadError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        let days = normalize_days(&raw);
        if days.is_empty() {
            tracing::warn!(path = %path.display(), "required dataset normalized to an empty itinerary");
        }

        Ok(days)
    }

    async fn optional(&self, option: RouteOption) -> Dataset {
        let path = self.path_for(option, Language::De);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no German variant, falling back to English");
                return Dataset::Missing;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "German variant unreadable");
                return Dataset::Failed;
            }
        };

        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(raw) => Dataset::Ready(normalize_days(&raw)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "German variant unparsable");
                Dataset::Failed
            }
        }
    }

    fn path_for(&self, option: RouteOption, language: Language) -> PathBuf {
        let file = match language {
            Language::En => format!("{option}.json"),
            Language::De => format!("{option}-de.json"),
        };

        Path::new(&self.base).join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32, title: &str) -> DayRecord {
        DayRecord {
            day: n,
            date: None,
            title: title.to_owned(),
            notes: None,
            helpful_info: None,
            hotel: None,
            highlights: Vec::new(),
            helpful_links: Vec::new(),
            lat: None,
            lng: None,
            km: None,
            time: None,
        }
    }

    fn store(option1_de: Dataset) -> ItineraryStore {
        ItineraryStore::new(
            Dataset::Ready(vec![day(1, "Tokyo")]),
            option1_de,
            Dataset::Ready(vec![day(1, "Sapporo")]),
            Dataset::Missing,
        )
    }

    #[test]
    fn german_request_without_german_data_falls_back_to_english() {
        for absent in [Dataset::Missing, Dataset::Failed] {
            let store = store(absent);

            assert_eq!(
                store.current_days(RouteOption::Option1, Language::De),
                store.current_days(RouteOption::Option1, Language::En),
            );
        }
    }

    #[test]
    fn german_dataset_is_preferred_when_ready() {
        let store = store(Dataset::Ready(vec![day(1, "Tokio")]));

        let days = store.current_days(RouteOption::Option1, Language::De);
        assert_eq!(days[0].title, "Tokio");
    }

    #[test]
    fn readiness_requires_at_least_one_dataset() {
        let empty = ItineraryStore::new(
            Dataset::Missing,
            Dataset::Missing,
            Dataset::Failed,
            Dataset::Missing,
        );

        assert!(!empty.has_ready());
        assert!(store(Dataset::Missing).has_ready());
    }

    #[test]
    fn dataset_file_names_follow_the_fixed_layout() {
        let loader = DataLoader::new("data");

        assert_eq!(
            loader.path_for(RouteOption::Option1, Language::En),
            Path::new("data/option1.json"),
        );
        assert_eq!(
            loader.path_for(RouteOption::Option2, Language::De),
            Path::new("data/option2-de.json"),
        );
    }
}

//! Reference survey dataset the classifier was trained on.
//!
//! Loading is optional. The primary and secondary exports are concatenated
//! and summarized for display; nothing in the prediction path reads them.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("no dataset files configured")]
    NoSources,
}

/// Aggregate view of the concatenated dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub sources: Vec<String>,
    pub rows: usize,
    pub depressed: usize,
    pub depression_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<(u32, u32)>,
}

#[derive(Debug, Deserialize)]
struct SurveyRow {
    #[serde(rename = "Age", default, deserialize_with = "lenient_age")]
    age: Option<u32>,
    #[serde(rename = "Depression")]
    depression: String,
}

impl SurveyRow {
    fn is_depressed(&self) -> bool {
        matches!(
            self.depression.trim().to_ascii_lowercase().as_str(),
            "yes" | "1" | "true"
        )
    }
}

fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let value = value.trim();
        value
            .parse::<u32>()
            .ok()
            .or_else(|| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|age| age.is_finite() && *age >= 0.0)
                    .map(|age| age.round() as u32)
            })
    }))
}

#[derive(Debug, Default)]
struct Tally {
    rows: usize,
    depressed: usize,
    age_range: Option<(u32, u32)>,
}

impl Tally {
    fn absorb<R: Read>(&mut self, reader: R) -> Result<(), csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        for record in csv_reader.deserialize::<SurveyRow>() {
            let row = record?;
            self.rows += 1;
            if row.is_depressed() {
                self.depressed += 1;
            }
            if let Some(age) = row.age {
                self.age_range = Some(match self.age_range {
                    Some((low, high)) => (low.min(age), high.max(age)),
                    None => (age, age),
                });
            }
        }

        Ok(())
    }

    fn finish(self, sources: Vec<String>) -> DatasetSummary {
        let depression_rate = if self.rows == 0 {
            0.0
        } else {
            self.depressed as f64 / self.rows as f64
        };

        DatasetSummary {
            sources,
            rows: self.rows,
            depressed: self.depressed,
            depression_rate,
            age_range: self.age_range,
        }
    }
}

pub struct ReferenceDataset;

impl ReferenceDataset {
    /// Concatenate every CSV in order and summarize the result.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<DatasetSummary, DatasetError> {
        if paths.is_empty() {
            return Err(DatasetError::NoSources);
        }

        let mut tally = Tally::default();
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let file = File::open(path).map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tally.absorb(file)?;
            sources.push(path.display().to_string());
        }

        let summary = tally.finish(sources);
        info!(rows = summary.rows, "reference dataset loaded");
        Ok(summary)
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<DatasetSummary, DatasetError> {
        let mut tally = Tally::default();
        tally.absorb(reader)?;
        Ok(tally.finish(vec![source.to_string()]))
    }

    /// Like [`ReferenceDataset::load`], but a failure is logged and swallowed into `None`.
    pub fn load_optional<P: AsRef<Path>>(paths: &[P]) -> Option<DatasetSummary> {
        if paths.is_empty() {
            return None;
        }

        match Self::load(paths) {
            Ok(summary) => Some(summary),
            Err(err) => {
                warn!(error = %err, "reference dataset unavailable");
                None
            }
        }
    }
}

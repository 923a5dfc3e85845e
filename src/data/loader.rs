use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord};

/// Public launch records CSV the dashboard reads when no `--data` is given.
pub const DEFAULT_SOURCE: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Columns that must be present in the CSV header. Any others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("fetching {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading CSV header")]
    Header(#[source] csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(String),
    #[error("CSV row {row}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("CSV row {row}: payload mass {value} is not a non-negative number")]
    InvalidPayload { row: usize, value: f64 },
    #[error("CSV row {row}: class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: u8 },
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the launch CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` values are URLs, anything else is a path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Url(value.to_string())
        } else {
            DataSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file or URL.
pub fn load_source(source: &DataSource) -> Result<LaunchDataset, LoadError> {
    match source {
        DataSource::File(path) => load_file(path),
        DataSource::Url(url) => load_url(url),
    }
}

pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

fn load_url(url: &str) -> Result<LaunchDataset, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let body = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(http_err)?;
    log::debug!("Fetched {} bytes from {url}", body.len());
    load_reader(&body[..])
}

/// Parse launch records from any CSV byte stream.
///
/// The header must name every column in [`REQUIRED_COLUMNS`]. Payloads
/// must be finite and non-negative and `class` must be 0 or 1; anything
/// else fails the whole load.
pub fn load_reader<R: Read>(reader: R) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.map_err(|source| LoadError::Csv { row, source })?;
        validate(&record, row)?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

fn validate(record: &LaunchRecord, row: usize) -> Result<(), LoadError> {
    let payload = record.payload_mass_kg;
    if !payload.is_finite() || payload < 0.0 {
        return Err(LoadError::InvalidPayload {
            row,
            value: payload,
        });
    }
    if record.outcome_class > 1 {
        return Err(LoadError::InvalidOutcome {
            row,
            value: record.outcome_class,
        });
    }
    Ok(())
}

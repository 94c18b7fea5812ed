use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::metrics::derive_metrics;
use super::model::{Dataset, Record};

/// Column schema the decision agent writes, in this exact order.
pub const EXPECTED_HEADERS: [&str; 9] = [
    "Date",
    "Ticker",
    "CompanyName",
    "Action",
    "Confidence",
    "Reasoning",
    "Financials",
    "Technicals",
    "PromptID",
];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Loader failures. Only [`LoadError::SourceUnavailable`] halts the whole
/// render cycle; everything else degrades to a status message.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The agent has not produced the results file (yet).
    #[error("results file not found: {path} — run the decision agent first")]
    SourceUnavailable { path: PathBuf },

    #[error("unexpected header: expected {expected:?}, got {found:?}")]
    Header {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as written by the agent. `Confidence` stays textual so a
/// non-numeric cell degrades to a missing value instead of a row error.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "CompanyName")]
    company_name: String,
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "Confidence")]
    confidence: String,
    #[serde(rename = "Reasoning")]
    reasoning: String,
    #[serde(rename = "Financials")]
    financials: String,
    #[serde(rename = "Technicals")]
    technicals: String,
    #[serde(rename = "PromptID")]
    prompt_id: String,
}

impl From<RawRow> for Record {
    fn from(row: RawRow) -> Self {
        Record {
            date: row.date,
            ticker: row.ticker,
            company_name: row.company_name,
            action: row.action,
            confidence: row.confidence.trim().parse::<f64>().ok(),
            reasoning: row.reasoning,
            financials: row.financials,
            technicals: row.technicals,
            prompt_id: row.prompt_id,
            volatility: None,
            liquidity: None,
        }
    }
}

/// Load the agent's results CSV and derive the technicals metrics.
///
/// Row policy: a row with the wrong column count cannot be mapped onto the
/// fixed schema and is skipped with a warning; a non-numeric `Confidence`
/// cell loads as `None` and the record is kept.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceUnavailable {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers != EXPECTED_HEADERS {
        return Err(LoadError::Header {
            expected: EXPECTED_HEADERS.iter().map(|h| h.to_string()).collect(),
            found: headers,
        });
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(row) => records.push(Record::from(row)),
            Err(e) => {
                log::warn!("skipping row {}: {e}", row_no + 1);
            }
        }
    }

    derive_metrics(&mut records);

    let dataset = Dataset::from_records(records);
    log::info!(
        "loaded {} records from {} (actions: {:?})",
        dataset.len(),
        path.display(),
        dataset.actions
    );
    Ok(dataset)
}

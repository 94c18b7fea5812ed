use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one decision event (one row of the agent's CSV)
// ---------------------------------------------------------------------------

/// A single decision record emitted by the external trading agent, plus the
/// metrics derived from its `technicals` blob.
#[derive(Debug, Clone)]
pub struct Record {
    /// Calendar date, kept as text (also the future backtest join key).
    pub date: String,
    /// Short identifier, not unique (the agent revisits tickers over time).
    pub ticker: String,
    pub company_name: String,
    /// Open vocabulary discovered from the data ("BUY", "IGNORE", "SELL", …).
    pub action: String,
    /// Agent certainty in [0, 1]. `None` when the cell was not numeric;
    /// out-of-range values pass through unvalidated.
    pub confidence: Option<f64>,
    /// Free-text rationale, display-only.
    pub reasoning: String,
    /// Opaque blob, never parsed.
    pub financials: String,
    /// Free-text blob carrying the labeled figures the metrics are
    /// extracted from.
    pub technicals: String,
    pub prompt_id: String,

    // -- Derived from `technicals`, never loaded or persisted --
    /// Percentage magnitude from "Volatility: x%" (4.06, not 0.0406).
    pub volatility: Option<f64>,
    /// Raw count from "Avg Trading Value: n".
    pub liquidity: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All records of one load, in source-row order, with the set of distinct
/// actions observed in the unfiltered data (drives the filter control).
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Sorted distinct `action` values across the whole dataset.
    pub actions: BTreeSet<String>,
}

impl Dataset {
    /// Build the action vocabulary index from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let actions = records.iter().map(|r| r.action.clone()).collect();
        Dataset { records, actions }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal record for data-layer tests.
    pub(crate) fn record(action: &str, confidence: Option<f64>) -> Record {
        Record {
            date: "2025-04-01".into(),
            ticker: "7203".into(),
            company_name: "Toyota Motor".into(),
            action: action.into(),
            confidence,
            reasoning: String::new(),
            financials: String::new(),
            technicals: String::new(),
            prompt_id: "p1".into(),
            volatility: None,
            liquidity: None,
        }
    }

    #[test]
    fn vocabulary_collects_distinct_actions_sorted() {
        let ds = Dataset::from_records(vec![
            record("IGNORE", Some(0.4)),
            record("BUY", Some(0.9)),
            record("BUY", Some(0.8)),
        ]);
        let vocab: Vec<&str> = ds.actions.iter().map(String::as_str).collect();
        assert_eq!(vocab, ["BUY", "IGNORE"]);
        assert_eq!(ds.len(), 3);
    }
}

/// Data layer: core types, loading, metric extraction, filtering, and
/// chart aggregation.
///
/// Architecture:
/// ```text
///  results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Record>, distinct SourceUnavailable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metrics  │  regex over `technicals` → volatility / liquidity
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  action membership ∧ confidence ≥ threshold → indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  charts   │  action counts + scatter points with hover metadata
///   └──────────┘
/// ```

pub mod charts;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;

// End-to-end pipeline check: load → derive → filter → aggregate.
#[cfg(test)]
mod pipeline_tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::charts::{action_distribution, correlation_points};
    use super::filter::{filtered_indices, init_filter_state};
    use super::loader::load_file;

    #[test]
    fn full_pipeline_with_one_unlabeled_technicals_blob() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Date,Ticker,CompanyName,Action,Confidence,Reasoning,Financials,Technicals,PromptID"
        )
        .unwrap();
        writeln!(file, "2025-04-01,7203,Toyota Motor,BUY,0.82,undervalued,PER 9x,Volatility: 4.06% | Avg Trading Value: 12000,p1").unwrap();
        writeln!(file, "2025-04-01,9984,SoftBank Group,IGNORE,0.40,too uncertain,PER 20x,Volatility: 8.10% | Avg Trading Value: 9000,p1").unwrap();
        writeln!(file, "2025-04-02,6758,Sony Group,IGNORE,0.55,fairly priced,PER 18x,Avg Trading Value: 15000,p2").unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.records.iter().filter(|r| r.volatility.is_none()).count(),
            1
        );

        // Default filter: {BUY, IGNORE}, confidence >= 0.5
        let filters = init_filter_state(&dataset);
        let visible = filtered_indices(&dataset, &filters);
        assert_eq!(visible, vec![0, 2]);

        // Table rows equal the filtered count exactly.
        assert_eq!(visible.len(), 2);

        let counts = action_distribution(&dataset, &visible);
        assert_eq!(counts["BUY"], 1);
        assert_eq!(counts["IGNORE"], 1);

        // Sony has no volatility label, so only Toyota plots.
        let points = correlation_points(&dataset, &visible);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].ticker, "7203");
    }
}

use std::collections::BTreeMap;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Aggregations feeding the two charts
// ---------------------------------------------------------------------------

/// One point of the volatility-vs-confidence scatter, with the metadata
/// surfaced on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub volatility: f64,
    pub confidence: f64,
    pub action: String,
    pub ticker: String,
    pub company_name: String,
    pub reasoning: String,
}

/// Count filtered records per action. Actions with no filtered match are
/// absent from the map (no zero slices).
pub fn action_distribution(dataset: &Dataset, indices: &[usize]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for &idx in indices {
        *counts.entry(dataset.records[idx].action.clone()).or_insert(0) += 1;
    }
    counts
}

/// Build the scatter points for the filtered view.
///
/// Records missing either axis value are dropped from the scatter (they
/// still count in the distribution and show in the table); an empty
/// filtered view yields no points and the UI skips the plot entirely.
pub fn correlation_points(dataset: &Dataset, indices: &[usize]) -> Vec<ScatterPoint> {
    indices
        .iter()
        .filter_map(|&idx| {
            let rec = &dataset.records[idx];
            let volatility = rec.volatility?;
            let confidence = rec.confidence?;
            Some(ScatterPoint {
                volatility,
                confidence,
                action: rec.action.clone(),
                ticker: rec.ticker.clone(),
                company_name: rec.company_name.clone(),
                reasoning: rec.reasoning.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn distribution_counts_only_present_actions() {
        let ds = Dataset::from_records(vec![
            record("BUY", Some(0.9)),
            record("BUY", Some(0.8)),
            record("IGNORE", Some(0.6)),
            record("SELL", Some(0.7)),
        ]);
        // filtered view without the SELL row
        let counts = action_distribution(&ds, &[0, 1, 2]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["BUY"], 2);
        assert_eq!(counts["IGNORE"], 1);
        assert!(!counts.contains_key("SELL"));
    }

    #[test]
    fn empty_view_builds_no_points() {
        let ds = Dataset::from_records(vec![record("BUY", Some(0.9))]);
        assert!(correlation_points(&ds, &[]).is_empty());
        assert!(action_distribution(&ds, &[]).is_empty());
    }

    #[test]
    fn points_missing_an_axis_are_dropped() {
        let mut with_vol = record("BUY", Some(0.9));
        with_vol.volatility = Some(4.06);
        with_vol.reasoning = "cheap vs peers".into();
        let mut no_vol = record("IGNORE", Some(0.6));
        no_vol.volatility = None;
        let mut no_conf = record("BUY", None);
        no_conf.volatility = Some(2.0);

        let ds = Dataset::from_records(vec![with_vol, no_vol, no_conf]);
        let points = correlation_points(&ds, &[0, 1, 2]);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].volatility, 4.06);
        assert_eq!(points[0].confidence, 0.9);
        assert_eq!(points[0].action, "BUY");
        assert_eq!(points[0].reasoning, "cheap vs peers");
        // dropped from the scatter, still present in the distribution
        assert_eq!(action_distribution(&ds, &[0, 1, 2]).len(), 2);
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Record;

// ---------------------------------------------------------------------------
// Technicals micro-format extraction
// ---------------------------------------------------------------------------
//
// The agent embeds labeled figures in the free-text `technicals` blob, e.g.
//
//   "Volatility: 4.06% | Avg Trading Value: 12000 | RSI neutral"
//
// Surrounding text and label order are unconstrained; extraction is purely
// pattern-based.

static VOLATILITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Volatility:\s*([\d.]+)%").unwrap());

static LIQUIDITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Avg Trading Value:\s*(\d+)").unwrap());

/// Extract the first capture of `pattern` from `text` as a number.
///
/// Returns `None` when the label is absent or the captured text does not
/// parse; "missing" is a distinct state, never conflated with zero.
pub fn extract_metric(text: &str, pattern: &Regex) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Attach derived metrics to every record.
///
/// Pure per-record transform; extraction failure leaves the field `None`
/// and never drops the record.
pub fn derive_metrics(records: &mut [Record]) {
    for rec in records.iter_mut() {
        rec.volatility = extract_metric(&rec.technicals, &VOLATILITY_RE);
        rec.liquidity = extract_metric(&rec.technicals, &LIQUIDITY_RE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    const SAMPLE: &str = "Volatility: 4.06% | Avg Trading Value: 12000";

    #[test]
    fn extracts_both_labeled_figures() {
        assert_eq!(extract_metric(SAMPLE, &VOLATILITY_RE), Some(4.06));
        assert_eq!(extract_metric(SAMPLE, &LIQUIDITY_RE), Some(12000.0));
    }

    #[test]
    fn extraction_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(extract_metric(SAMPLE, &VOLATILITY_RE), Some(4.06));
        }
        let unlabeled = "RSI neutral, volume thin";
        for _ in 0..3 {
            assert_eq!(extract_metric(unlabeled, &VOLATILITY_RE), None);
            assert_eq!(extract_metric(unlabeled, &LIQUIDITY_RE), None);
        }
    }

    #[test]
    fn absent_label_yields_missing_not_zero() {
        assert_eq!(extract_metric("Avg Trading Value: 500", &VOLATILITY_RE), None);
    }

    #[test]
    fn non_numeric_capture_yields_missing() {
        // "..%" captures dots only, which does not parse as f64
        assert_eq!(extract_metric("Volatility: ..%", &VOLATILITY_RE), None);
    }

    #[test]
    fn surrounding_text_and_order_are_unconstrained() {
        let text = "liq first: Avg Trading Value: 9000, then Volatility: 12.5% (high)";
        assert_eq!(extract_metric(text, &VOLATILITY_RE), Some(12.5));
        assert_eq!(extract_metric(text, &LIQUIDITY_RE), Some(9000.0));
    }

    #[test]
    fn derive_keeps_records_with_missing_labels() {
        let mut records = vec![record("BUY", Some(0.8)), record("IGNORE", Some(0.4))];
        records[0].technicals = SAMPLE.into();
        records[1].technicals = "no labeled figures here".into();

        derive_metrics(&mut records);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].volatility, Some(4.06));
        assert_eq!(records[0].liquidity, Some(12000.0));
        assert_eq!(records[1].volatility, None);
        assert_eq!(records[1].liquidity, None);
    }
}

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "results.csv".to_string());

    let mut rng = SimpleRng::new(42);

    let universe: [(&str, &str); 6] = [
        ("7203", "Toyota Motor"),
        ("9984", "SoftBank Group"),
        ("6758", "Sony Group"),
        ("8306", "Mitsubishi UFJ"),
        ("9432", "NTT"),
        ("4063", "Shin-Etsu Chemical"),
    ];
    let actions = ["BUY", "IGNORE", "SELL"];
    let dates = ["2025-04-01", "2025-04-02", "2025-04-03", "2025-04-04"];
    let reasonings = [
        "Undervalued vs sector peers with improving momentum",
        "Volatility too high for the expected edge",
        "Earnings revision trend is negative",
        "Fairly priced; no catalyst in sight",
    ];

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "Date",
        "Ticker",
        "CompanyName",
        "Action",
        "Confidence",
        "Reasoning",
        "Financials",
        "Technicals",
        "PromptID",
    ])?;

    let mut rows = 0usize;
    for &date in &dates {
        for &(ticker, company) in &universe {
            let action = *rng.pick(&actions);
            let confidence = (rng.next_f64() * 100.0).round() / 100.0;
            let volatility = 1.0 + rng.next_f64() * 9.0;
            let liquidity = 1000 + (rng.next_u64() % 20_000);

            // Roughly one row in six lacks the Volatility label so the
            // missing-metric path shows up in the dashboard.
            let technicals = if rng.next_u64() % 6 == 0 {
                format!("Avg Trading Value: {liquidity} | RSI neutral")
            } else {
                format!(
                    "Volatility: {volatility:.2}% | Avg Trading Value: {liquidity} | RSI neutral"
                )
            };

            let confidence = format!("{confidence:.2}");
            writer.write_record([
                date,
                ticker,
                company,
                action,
                confidence.as_str(),
                *rng.pick(&reasonings),
                "PER 14.2x, PBR 1.1x, ROE 8.4%",
                technicals.as_str(),
                "prompt-v3",
            ])?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} decision records to {output_path}");
    Ok(())
}

use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Record;
use crate::state::AppState;

/// Column headers of the detail table: every loaded field plus the two
/// derived metrics.
const COLUMNS: [&str; 11] = [
    "Date",
    "Ticker",
    "Company",
    "Action",
    "Confidence",
    "Volatility",
    "Liquidity",
    "Reasoning",
    "Financials",
    "Technicals",
    "PromptID",
];

// ---------------------------------------------------------------------------
// Detailed records table
// ---------------------------------------------------------------------------

/// Render every field of every filtered record; one table row per
/// visible record.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong(format!("Detailed Records ({})", state.visible_indices.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), 7)
        .columns(Column::remainder().clip(true), 4)
        .header(20.0, |mut header| {
            for title in COLUMNS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                for cell in row_cells(rec) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn row_cells(rec: &Record) -> [String; 11] {
    [
        rec.date.clone(),
        rec.ticker.clone(),
        rec.company_name.clone(),
        rec.action.clone(),
        fmt_opt(rec.confidence, 2),
        fmt_opt(rec.volatility, 2),
        fmt_opt(rec.liquidity, 0),
        rec.reasoning.clone(),
        rec.financials.clone(),
        rec.technicals.clone(),
        rec.prompt_id.clone(),
    ]
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "–".to_string(),
    }
}

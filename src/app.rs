use eframe::egui::{self, Color32, RichText};

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AgentLensApp {
    pub state: AppState,
}

impl eframe::App for AgentLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Source unavailable: blocking error, nothing else renders ----
        if let Some(msg) = self.state.source_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.heading(RichText::new(msg).color(Color32::RED));
                });
            });
            return;
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: backtest tip ----
        egui::TopBottomPanel::bottom("info_bar").show(ctx, |ui| {
            ui.label(
                "Tip: run 'backtest' and merge the result to see Win/Loss on the chart.",
            );
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                charts::distribution_chart(&mut cols[0], &self.state);
                charts::correlation_chart(&mut cols[1], &self.state);
            });
            ui.separator();
            table::records_table(ui, &self.state);
        });
    }
}

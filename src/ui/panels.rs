use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: action multi-select over the unfiltered
/// vocabulary plus the minimum-confidence slider.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the vocabulary so we can mutate state inside the loop.
    let all_actions: Vec<String> = dataset.actions.iter().cloned().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Action multi-select ----
            let n_selected = state.filters.actions.len();
            let header_text = format!("Action  ({n_selected}/{})", all_actions.len());
            ui.strong(RichText::new(header_text));

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_actions();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_actions();
                }
            });

            for action in &all_actions {
                let mut text = RichText::new(action);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(action));
                }
                let mut checked = state.filters.actions.contains(action);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_action(action);
                }
            }

            ui.separator();

            // ---- Confidence threshold ----
            ui.strong("Min Confidence");
            let mut threshold = state.filters.min_confidence;
            if ui
                .add(egui::Slider::new(&mut threshold, 0.0..=1.0).fixed_decimals(2))
                .changed()
            {
                state.set_min_confidence(threshold);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} shown",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open decision records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::AgentLensApp;
use eframe::egui;
use state::DEFAULT_RESULTS_PATH;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Agent Lens – Decision Dashboard",
        options,
        Box::new(|_cc| {
            let mut app = AgentLensApp::default();
            // The agent drops results.csv next to this process's parent dir;
            // a missing file renders the blocking error screen.
            app.state.load(Path::new(DEFAULT_RESULTS_PATH));
            Ok(Box::new(app))
        }),
    )
}

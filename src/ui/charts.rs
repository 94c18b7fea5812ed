use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::charts::{action_distribution, correlation_points, ScatterPoint};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Distribution of decisions (per-action counts)
// ---------------------------------------------------------------------------

/// Render the per-action count chart for the filtered view. Renders an
/// empty plot when nothing passes the filters.
pub fn distribution_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Distribution of Decisions");

    let counts = action_distribution(dataset, &state.visible_indices);

    // One single-bar series per action so the legend carries the labels.
    let charts: Vec<BarChart> = counts
        .iter()
        .enumerate()
        .map(|(i, (action, &count))| {
            let color = color_for(state, action);
            BarChart::new(vec![Bar::new(i as f64, count as f64).width(0.6)])
                .name(action)
                .color(color)
        })
        .collect();

    Plot::new("distribution_plot")
        .legend(Legend::default())
        .y_axis_label("Count")
        .show_x(false)
        .height(260.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Volatility vs Confidence scatter
// ---------------------------------------------------------------------------

/// Render the correlation scatter for the filtered view.
///
/// Skipped entirely when nothing passes the filters; records without a
/// plottable volatility/confidence pair are left out of the point set.
pub fn correlation_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Volatility vs Confidence");

    if state.visible_indices.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    let points = correlation_points(dataset, &state.visible_indices);

    // Group into one series per action for legend + colour.
    let mut by_action: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for pt in &points {
        by_action
            .entry(pt.action.as_str())
            .or_default()
            .push([pt.volatility, pt.confidence]);
    }

    let hover_points = points.clone();

    Plot::new("correlation_plot")
        .legend(Legend::default())
        .x_axis_label("Volatility (%)")
        .y_axis_label("Confidence")
        .height(260.0)
        .label_formatter(move |name, value| {
            match nearest_point(&hover_points, value.x, value.y) {
                Some(pt) => format!(
                    "{} {} ({})\nvolatility {:.2}%  confidence {:.2}\n{}",
                    pt.ticker, pt.company_name, pt.action, pt.volatility, pt.confidence, pt.reasoning
                ),
                None if name.is_empty() => format!("{:.2}, {:.2}", value.x, value.y),
                None => format!("{name}\n{:.2}, {:.2}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for (action, coords) in by_action {
                let color = color_for(state, action);
                let markers = Points::new(PlotPoints::from(coords))
                    .name(action)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .radius(4.0);
                plot_ui.points(markers);
            }
        });
}

/// Find the point closest to the cursor, within a small plot-space radius.
fn nearest_point(points: &[ScatterPoint], x: f64, y: f64) -> Option<&ScatterPoint> {
    points
        .iter()
        .map(|pt| {
            let dx = pt.volatility - x;
            let dy = pt.confidence - y;
            (pt, dx * dx + dy * dy)
        })
        .filter(|(_, d2)| *d2 < 0.25)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(pt, _)| pt)
}

fn color_for(state: &AppState, action: &str) -> Color32 {
    state
        .color_map
        .as_ref()
        .map(|cm| cm.color_for(action))
        .unwrap_or(Color32::LIGHT_BLUE)
}

use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: action label → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct action labels of the loaded dataset to distinct
/// colours so both charts and the filter checkboxes agree on hue.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the observed action vocabulary.
    pub fn new(actions: &BTreeSet<String>) -> Self {
        let palette = generate_palette(actions.len());
        let mapping: BTreeMap<String, Color32> = actions
            .iter()
            .zip(palette.into_iter())
            .map(|(a, c)| (a.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given action.
    pub fn color_for(&self, action: &str) -> Color32 {
        self.mapping
            .get(action)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_get_distinct_colors() {
        let actions: BTreeSet<String> =
            ["BUY", "IGNORE", "SELL"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&actions);
        let buy = cm.color_for("BUY");
        let ignore = cm.color_for("IGNORE");
        let sell = cm.color_for("SELL");
        assert_ne!(buy, ignore);
        assert_ne!(ignore, sell);
        assert_ne!(buy, sell);
    }

    #[test]
    fn unknown_action_falls_back_to_default() {
        let cm = ColorMap::new(&BTreeSet::new());
        assert_eq!(cm.color_for("HOLD"), Color32::GRAY);
    }
}

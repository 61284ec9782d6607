use std::collections::BTreeMap;

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
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps the category labels of one chart (models, regions, fuel types…) to
/// distinct colours. Labels are sorted first so the same set always gets
/// the same assignment regardless of series order.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given category labels.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let sorted: std::collections::BTreeSet<&str> = labels.into_iter().collect();
        let palette = generate_palette(sorted.len());
        let mapping = sorted
            .into_iter()
            .zip(palette)
            .map(|(label, color)| (label.to_string(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Diverging ramp for the correlation heatmap
// ---------------------------------------------------------------------------

/// Map `t` in [-1, 1] onto a blue–white–red diverging ramp.
/// Values outside the range are clamped.
pub fn diverging_color(t: f64) -> Color32 {
    let t = t.clamp(-1.0, 1.0) as f32;
    let blue = Srgb::new(0.13, 0.40, 0.67);
    let white = Srgb::new(0.97, 0.97, 0.97);
    let red = Srgb::new(0.70, 0.09, 0.17);

    let (from, to, f) = if t < 0.0 {
        (white, blue, -t)
    } else {
        (white, red, t)
    };
    let mix = |a: f32, b: f32| a + (b - a) * f;
    Color32::from_rgb(
        (mix(from.red, to.red) * 255.0) as u8,
        (mix(from.green, to.green) * 255.0) as u8,
        (mix(from.blue, to.blue) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn color_map_is_order_independent() {
        let forward = ColorMap::new(["Asia", "Europe", "US"]);
        let backward = ColorMap::new(["US", "Europe", "Asia"]);
        for label in ["Asia", "Europe", "US"] {
            assert_eq!(forward.color_for(label), backward.color_for(label));
        }
    }

    #[test]
    fn diverging_ramp_endpoints() {
        // Zero is near-white, the extremes are saturated.
        let mid = diverging_color(0.0);
        assert!(mid.r() > 230 && mid.g() > 230 && mid.b() > 230);
        assert!(diverging_color(1.0).r() > diverging_color(1.0).b());
        assert!(diverging_color(-1.0).b() > diverging_color(-1.0).r());
    }
}

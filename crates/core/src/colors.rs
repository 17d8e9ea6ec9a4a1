//! Slice colors and the built-in palette.
//!
//! Colors are stored as sRGB components so the persisted blob stays
//! frontend-agnostic. Decoding guards against non-finite components left
//! behind by a bad blob and falls back to the default blue.

use serde::{Deserialize, Deserializer, Serialize};

/// An sRGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Color {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Fallback color when a stored color cannot be recovered.
    pub const DEFAULT: Color = Color::rgb(0.0, 0.5, 1.0);

    /// Hex string form (`#rrggbb`) for display. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            red: f64,
            green: f64,
            blue: f64,
            #[serde(default = "default_alpha")]
            alpha: f64,
        }

        fn default_alpha() -> f64 {
            1.0
        }

        let raw = Raw::deserialize(deserializer)?;
        let components = [raw.red, raw.green, raw.blue, raw.alpha];
        if components.iter().all(|c| c.is_finite()) {
            Ok(Color {
                red: raw.red,
                green: raw.green,
                blue: raw.blue,
                alpha: raw.alpha,
            })
        } else {
            Ok(Color::DEFAULT)
        }
    }
}

/// Built-in slice palette, assigned to new items in order.
pub const PALETTE: [Color; 10] = [
    Color::rgb(0.0, 0.478, 1.0),    // blue
    Color::rgb(0.204, 0.78, 0.349), // green
    Color::rgb(1.0, 0.584, 0.0),    // orange
    Color::rgb(1.0, 0.231, 0.188),  // red
    Color::rgb(0.686, 0.322, 0.871), // purple
    Color::rgb(1.0, 0.176, 0.333),  // pink
    Color::rgb(1.0, 0.8, 0.0),      // yellow
    Color::rgb(0.196, 0.678, 0.902), // cyan
    Color::rgb(0.0, 0.78, 0.745),   // mint
    Color::rgb(0.345, 0.337, 0.839), // indigo
];

/// Pick the first palette color not already in use. Once the palette is
/// exhausted, cycle through it by item count so assignment stays
/// deterministic.
pub fn next_available(used: &[Color]) -> Color {
    for color in PALETTE.iter() {
        if !used.contains(color) {
            return *color;
        }
    }
    PALETTE[used.len() % PALETTE.len()]
}

//! Breakdown data for the chart collaborator
//!
//! The chart consumes parallel sequences of labels, values, and colors. The
//! color assigned to an entry is a pure function of its position: pastel
//! `hsl((index * 50) % 360, 70%, 70%)`, converted here to RGB for terminal
//! rendering.

use crate::models::Ledger;

/// An RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// What the chart collaborator consumes after every recompute
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<Rgb>,
}

impl Breakdown {
    /// Build the breakdown from the current ledger state
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            labels: ledger.expenses.iter().map(|e| e.category.clone()).collect(),
            values: ledger.expenses.iter().map(|e| e.amount).collect(),
            colors: (0..ledger.expenses.len()).map(pastel_color).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Pastel color for the entry at `index`: hue walks the wheel in 50 degree
/// steps, saturation and lightness fixed at 70%.
pub fn pastel_color(index: usize) -> Rgb {
    let hue = ((index * 50) % 360) as f64;
    hsl_to_rgb(hue, 0.7, 0.7)
}

/// Convert an HSL color (hue in degrees, saturation/lightness in 0..=1) to RGB
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hue_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    Rgb(
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

//! Fraud-likelihood gauge
//!
//! Maps a scalar position to a marker offset over a five-band color strip.
//! The bands are always rendered at equal 20% widths; the position only moves
//! the marker. The marker is centered on its percentage by subtracting half
//! the glyph width from the offset.

use gpui::{hsla, Hsla};

/// Rendered width of the gauge track.
pub const TRACK_WIDTH: f32 = 360.0;

/// Half the width of the marker glyph, in px. Subtracted from the offset so
/// the glyph centers on the target percentage instead of left-aligning.
pub const MARKER_HALF_WIDTH: f32 = 6.0;

pub const BAND_COUNT: usize = 5;

/// One fixed-width color band of the strip.
#[derive(Debug, Clone, Copy)]
pub struct GaugeBand {
    pub label: &'static str,
    hue: f32,
    saturation: f32,
    lightness: f32,
}

impl GaugeBand {
    pub fn color(&self) -> Hsla {
        hsla(self.hue / 360.0, self.saturation, self.lightness, 1.0)
    }
}

/// The five risk bands, left to right. Width is uniform regardless of the
/// marker position.
pub static BANDS: [GaugeBand; BAND_COUNT] = [
    GaugeBand {
        label: "Very Low",
        hue: 152.0,
        saturation: 0.68,
        lightness: 0.42,
    },
    GaugeBand {
        label: "Low",
        hue: 95.0,
        saturation: 0.60,
        lightness: 0.45,
    },
    GaugeBand {
        label: "Moderate",
        hue: 45.0,
        saturation: 0.90,
        lightness: 0.50,
    },
    GaugeBand {
        label: "High",
        hue: 25.0,
        saturation: 0.88,
        lightness: 0.52,
    },
    GaugeBand {
        label: "Critical",
        hue: 4.0,
        saturation: 0.72,
        lightness: 0.50,
    },
];

pub fn band_width_percent() -> f32 {
    100.0 / BAND_COUNT as f32
}

/// Clamp the position to the track. Upper bound only: values above 100 pin to
/// 100, while values below 0 pass through unclamped. The asymmetry is carried
/// over from the source and is likely unintentional; keep it until product
/// says otherwise.
pub fn safe_position(position: f32) -> f32 {
    position.min(100.0)
}

/// Horizontal offset of the marker glyph within a track of `track_width` px.
/// Can go negative: at position 0 the glyph is centered on the left edge, and
/// unclamped below-zero positions push it further out.
pub fn marker_offset(position: f32, track_width: f32) -> f32 {
    safe_position(position) / 100.0 * track_width - MARKER_HALF_WIDTH
}

/// Which band the position falls in, for the textual readout next to the
/// strip. Out-of-range positions resolve to the nearest edge band.
pub fn band_for(position: f32) -> &'static GaugeBand {
    let index = (position / band_width_percent()).floor();
    let index = (index.max(0.0) as usize).min(BAND_COUNT - 1);
    &BANDS[index]
}

//! Render configuration: immutable values supplied once, before any render.

use crate::svg::{Color, Point};

/// Canvas dimensions and fitting margin.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// Font size and anchor offset for one kind of label.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelSettings {
    pub font_size: u32,
    pub offset: Point,
}

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusSettings {
    pub line_width: f64,
    pub label: LabelSettings,
}

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSettings {
    pub radius: f64,
    pub label: LabelSettings,
}

/// Styling for the opaque copy drawn beneath every label.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnderlaySettings {
    pub color: Color,
    pub width: f64,
}

/// Complete map styling. No behavior lives here; the composer reads it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings {
    pub canvas: CanvasSettings,
    pub bus: BusSettings,
    pub stop: StopSettings,
    pub underlay: UnderlaySettings,
    /// Route colors, assigned round-robin in bus-name order.
    pub palette: Vec<Color>,
}

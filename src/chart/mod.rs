//! Headless chart rendering.
//!
//! Charts are rasterized in memory by the plotters bitmap backend and encoded to PNG, so no
//! display is needed. Output names and sizes are fixed. Colors and markers are assigned by
//! [`Algorithm::index`], never looked up by name.

use plotters::style::RGBColor;

use crate::Algorithm;

mod comparison;
mod load;

pub use comparison::{draw_comparison, render_comparison};
pub use load::{draw_load, render_load};

/// File written by [`render_comparison`].
pub const COMPARISON_OUTPUT: &str = "hash_performance_comparison.png";

/// Pixel size of the comparison chart (15 by 6 units at 100 pixels per unit).
pub const COMPARISON_SIZE: (u32, u32) = (1500, 600);

/// File written by [`render_load`].
pub const LOAD_OUTPUT: &str = "load_comparison.png";

/// Pixel size of the load chart (10 by 6 units at 100 pixels per unit).
pub const LOAD_SIZE: (u32, u32) = (1000, 600);

/// Iterations behind each lookup time of a report.
pub const REPORT_LOOKUP_ITERATIONS: u32 = 100_000;

/// Iterations behind each lookup time of a load test.
pub const LOAD_LOOKUP_ITERATIONS: u32 = 10_000;

/// Bar fill per algorithm: blue, green, red, purple.
pub const BAR_COLORS: [RGBColor; Algorithm::COUNT] = [
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0),
    RGBColor(255, 0, 0),
    RGBColor(128, 0, 128),
];

/// Line color per algorithm: blue, green, red, magenta.
pub const LINE_COLORS: [RGBColor; Algorithm::COUNT] = [
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0),
    RGBColor(255, 0, 0),
    RGBColor(191, 0, 191),
];

/// Point marker per algorithm.
pub const MARKERS: [Marker; Algorithm::COUNT] = [
    Marker::Circle,
    Marker::Square,
    Marker::Triangle,
    Marker::Diamond,
];

/// The shape drawn at every data point of a line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Marker {
    /// A filled circle.
    Circle,
    /// A filled square.
    Square,
    /// A filled upward triangle.
    Triangle,
    /// A filled diamond.
    Diamond,
}

impl Marker {
    /// Half the width of a marker, in pixels.
    pub const RADIUS: i32 = 5;

    /// The marker outline as pixel offsets around the data point.
    pub fn outline(self) -> Vec<(i32, i32)> {
        let r = Self::RADIUS;
        match self {
            Marker::Circle => (0..16)
                .map(|i| {
                    let angle = f64::from(i) * std::f64::consts::PI / 8.0;
                    (
                        (f64::from(r) * angle.cos()).round() as i32,
                        (f64::from(r) * angle.sin()).round() as i32,
                    )
                })
                .collect(),
            Marker::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
            Marker::Triangle => vec![(0, -r), (r, r), (-r, r)],
            Marker::Diamond => vec![(0, -r), (r, 0), (0, r), (-r, 0)],
        }
    }
}

/// Upper bound of a value axis: leaves headroom above the largest value and is never zero.
fn axis_max(values: impl IntoIterator<Item = u64>) -> u64 {
    let max = values.into_iter().max().unwrap_or(0);
    max.saturating_add(max / 10).saturating_add(1)
}

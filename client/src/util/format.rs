//! Display strings shared by the playground panels and project cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use canvas::geometry::{Measurements, TypeArea, format_percent};
use canvas::plan::Plot;

/// `"{value} sq ft"`.
#[must_use]
pub fn sq_ft(value: f64) -> String {
    format!("{value} sq ft")
}

#[must_use]
pub fn area_line(area: f64) -> String {
    format!("Area: {}", sq_ft(area))
}

#[must_use]
pub fn perimeter_line(perimeter: f64) -> String {
    format!("Perimeter: {perimeter} ft")
}

/// Used area with its share of the plot, e.g. `"200 sq ft (8.3%)"`.
#[must_use]
pub fn used_area(m: &Measurements) -> String {
    format!("{} ({}%)", sq_ft(m.used_area), format_percent(m.used_percent))
}

/// One row of the per-type breakdown, e.g. `("Bedroom", "120 sq ft (5.0%)")`.
#[must_use]
pub fn type_area_row(entry: &TypeArea) -> (String, String) {
    (
        entry.room_type.label(),
        format!("{} ({}%)", sq_ft(entry.area), format_percent(entry.percent)),
    )
}

/// Card size line. Unsized projects have none.
#[must_use]
pub fn plot_size(plot: Plot) -> Option<String> {
    (plot.width > 0.0).then(|| format!("Size: {}' × {}'", plot.width, plot.length))
}

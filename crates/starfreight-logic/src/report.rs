//! Status-line formatting glue.
//!
//! The report strings are the only external surface of the simulation. They
//! are kept in one place so the entity modules hold no formatting logic.

use crate::position::Position;

/// Format a tonnage (or coordinate component) the way the report lines
/// expect: whole values without a trailing `.0`, fractional values as-is.
pub fn tons(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Vessel status line.
pub fn vessel_line(name: &str, position: Position, occupied: f64, capacity: f64) -> String {
    format!(
        "Корабль \"{}\". Местоположение: {}. Занято: {} из {}т.",
        name,
        position,
        tons(occupied),
        tons(capacity)
    )
}

/// Planet status line.
pub fn planet_line(name: &str, position: Position, available: f64) -> String {
    format!(
        "Планета \"{}\". Местоположение: {}. Доступно груза: {}т.",
        name,
        position,
        tons(available)
    )
}

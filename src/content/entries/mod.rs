//! Authored help content, one module per calculator.
//!
//! Each module returns its `(id, ContentEntry)` pair; `all()` collects the
//! full dataset for the production repository. Ids are the stable kebab-case
//! tokens the dashboard routes on — renaming one here breaks the widget's
//! help panel.

mod battery_life;
mod capacitor_code;
mod led_resistor;
mod ohms_law;
mod resistor_color_code;
mod series_parallel;
mod voltage_divider;
mod wire_gauge;

use crate::types::ContentEntry;

/// The full production dataset.
pub(super) fn all() -> Vec<(&'static str, ContentEntry)> {
    vec![
        ohms_law::entry(),
        resistor_color_code::entry(),
        voltage_divider::entry(),
        led_resistor::entry(),
        capacitor_code::entry(),
        series_parallel::entry(),
        wire_gauge::entry(),
        battery_life::entry(),
    ]
}

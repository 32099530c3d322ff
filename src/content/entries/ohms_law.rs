//! Ohm's Law calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "ohms-law",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Ohm's Law Calculator".to_string(),
                steps: vec![
                    "Choose which quantity you want to solve for: voltage, current, resistance, or power.".to_string(),
                    "Enter any two of the remaining quantities in the input fields.".to_string(),
                    "Pick the units for each input (e.g. mA vs A, kΩ vs Ω) from the unit dropdowns.".to_string(),
                    "Read the result — the calculator updates as you type, no submit button needed.".to_string(),
                    "Use the reset button to clear all fields and start a new calculation.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Understanding the Quantities".to_string(),
                items: vec![
                    MetricItem::new(
                        "Voltage (V)",
                        "The electrical potential difference between two points, measured in volts. \
                         Think of it as the pressure pushing charge around the circuit.",
                    ),
                    MetricItem::new(
                        "Current (I)",
                        "The rate of flow of electric charge, measured in amperes (amps). \
                         One amp is one coulomb of charge passing a point each second.",
                    ),
                    MetricItem::new(
                        "Resistance (R)",
                        "How strongly a component opposes current flow, measured in ohms (Ω). \
                         Higher resistance means less current for the same voltage.",
                    ),
                    MetricItem::new(
                        "Power (P)",
                        "The rate at which electrical energy is converted to heat or work, \
                         measured in watts. P = V × I.",
                    ),
                ],
            },
            guide: Guide {
                title: "Ohm's Law Explained".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "What Is Ohm's Law?",
                        "Ohm's law states that the current through a conductor between two points is \
                         directly proportional to the voltage across the two points and inversely \
                         proportional to the resistance between them: V = I × R. Published by Georg \
                         Ohm in 1827, it remains the single most used relationship in circuit \
                         analysis. Given any two of voltage, current, and resistance, you can always \
                         find the third.",
                    ),
                    GuideSection::bullets(
                        "The Three Forms",
                        vec![
                            "V = I × R — find voltage when you know current and resistance.".to_string(),
                            "I = V / R — find current when you know voltage and resistance.".to_string(),
                            "R = V / I — find resistance when you know voltage and current.".to_string(),
                        ],
                    ),
                    GuideSection::bullets(
                        "Power Relationships",
                        vec![
                            "P = V × I — the basic power formula.".to_string(),
                            "P = I² × R — useful when you know current through a resistor.".to_string(),
                            "P = V² / R — useful when you know the voltage across a resistor.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "When Ohm's Law Applies",
                        "Ohm's law holds for ohmic materials — conductors whose resistance stays \
                         constant over the operating range, such as metal-film resistors. It does \
                         not describe diodes, LEDs, or transistors, whose current-voltage curves \
                         are nonlinear. For those parts, use the component's datasheet curve and \
                         reserve Ohm's law for the resistive elements around them.",
                    ),
                    GuideSection::paragraph(
                        "A Worked Example",
                        "Suppose a 9 V battery drives a 450 Ω resistor. The current is \
                         I = V / R = 9 / 450 = 0.02 A, or 20 mA. The power dissipated in the \
                         resistor is P = V × I = 9 × 0.02 = 0.18 W, so a standard quarter-watt \
                         resistor handles it with margin to spare.",
                    ),
                ],
            },
        },
    )
}

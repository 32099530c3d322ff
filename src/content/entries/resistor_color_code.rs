//! Resistor color code calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "resistor-color-code",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Resistor Color Code Calculator".to_string(),
                steps: vec![
                    "Select the number of bands on your resistor: 4, 5, or 6.".to_string(),
                    "Pick the color of each band from left to right, starting with the band closest to one end.".to_string(),
                    "Read the decoded resistance value and tolerance below the band selectors.".to_string(),
                    "For 6-band resistors, the last band shows the temperature coefficient as well.".to_string(),
                    "Switch to reverse mode to enter a resistance value and see the matching band colors.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Key Terms".to_string(),
                items: vec![
                    MetricItem::new(
                        "Resistance Value",
                        "The nominal resistance encoded by the digit and multiplier bands, in ohms.",
                    ),
                    MetricItem::new(
                        "Tolerance",
                        "How far the actual resistance may deviate from the nominal value, as a \
                         percentage. Gold means ±5%, silver ±10%, brown ±1%.",
                    ),
                    MetricItem::new(
                        "Multiplier",
                        "The power of ten the digit bands are multiplied by. A red multiplier \
                         means ×100, so digits 4-7 become 4700 Ω.",
                    ),
                    MetricItem::new(
                        "Temperature Coefficient",
                        "How much the resistance drifts with temperature, in parts per million \
                         per degree Celsius (ppm/°C). Only present on 6-band resistors.",
                    ),
                ],
            },
            guide: Guide {
                title: "Reading Resistor Color Codes".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "Why Colors?",
                        "Through-hole resistors are too small to print readable numbers on, and \
                         printed digits could smudge or end up mounted face-down. Colored bands \
                         wrap the whole body, so the value stays legible from any angle. The \
                         scheme was standardized in the 1920s and is now fixed in IEC 60062.",
                    ),
                    GuideSection::bullets(
                        "How to Read Color Bands",
                        vec![
                            "Hold the resistor with the tolerance band (usually gold or silver, set apart by a gap) on the right.".to_string(),
                            "On a 4-band resistor: the first two bands are digits, the third is the multiplier, the fourth is tolerance.".to_string(),
                            "On a 5-band resistor: the first three bands are digits, the fourth is the multiplier, the fifth is tolerance.".to_string(),
                            "On a 6-band resistor: same as 5-band, plus a temperature coefficient band at the end.".to_string(),
                            "Combine the digits, multiply by the multiplier, and you have the nominal resistance.".to_string(),
                        ],
                    ),
                    GuideSection::bullets(
                        "The Digit Colors",
                        vec![
                            "Black = 0, Brown = 1, Red = 2, Orange = 3, Yellow = 4.".to_string(),
                            "Green = 5, Blue = 6, Violet = 7, Gray = 8, White = 9.".to_string(),
                            "A common mnemonic: Big Brown Rabbits Often Yield Great Big Vocal Groans When gigged.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "A Worked Example",
                        "Take a 4-band resistor with yellow, violet, red, and gold bands. Yellow \
                         is 4 and violet is 7, giving digits 47. The red multiplier is ×100, so \
                         the value is 4700 Ω, or 4.7 kΩ. Gold sets the tolerance at ±5%, meaning \
                         the real part measures between 4465 Ω and 4935 Ω.",
                    ),
                    GuideSection::paragraph(
                        "Common Pitfalls",
                        "Red and orange fade toward each other on older parts, and brown can look \
                         black under warm light. When a reading seems off by a factor of ten, you \
                         have probably misread the multiplier band or started from the wrong end. \
                         When in doubt, confirm with a multimeter — the bands give the nominal \
                         value, the meter gives the truth.",
                    ),
                ],
            },
        },
    )
}

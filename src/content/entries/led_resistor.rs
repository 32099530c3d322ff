//! LED current-limiting resistor calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "led-resistor",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the LED Resistor Calculator".to_string(),
                steps: vec![
                    "Enter your supply voltage (e.g. 5 V for USB power, 12 V for automotive).".to_string(),
                    "Enter the LED's forward voltage — check the datasheet, or use the color presets.".to_string(),
                    "Enter the desired forward current, typically 20 mA for standard indicator LEDs.".to_string(),
                    "Set how many LEDs are wired in series, if more than one.".to_string(),
                    "Read the calculated resistance, the nearest standard E24 value, and the resistor power rating to use.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "LED Circuit Terms".to_string(),
                items: vec![
                    MetricItem::new(
                        "Supply Voltage (Vs)",
                        "The voltage of the source powering the LED circuit.",
                    ),
                    MetricItem::new(
                        "Forward Voltage (Vf)",
                        "The voltage an LED drops when conducting. Roughly 1.8-2.2 V for red, \
                         2.0-2.4 V for yellow and green, 3.0-3.4 V for blue and white.",
                    ),
                    MetricItem::new(
                        "Forward Current (If)",
                        "The operating current through the LED. Brightness rises with current \
                         until the rated maximum, beyond which the LED degrades or fails.",
                    ),
                    MetricItem::new(
                        "Resistor Power",
                        "The heat the resistor must dissipate: (Vs − Vf) × If. Choose a resistor \
                         rated for at least twice this figure.",
                    ),
                ],
            },
            guide: Guide {
                title: "Why LEDs Need a Resistor".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "The Problem",
                        "An LED is not a resistor: once the applied voltage passes its forward \
                         voltage, current rises almost vertically. Connected straight across a \
                         supply even slightly above Vf, the LED draws far more current than it \
                         can survive and burns out in moments. A series resistor absorbs the \
                         difference between the supply and the forward voltage and sets a \
                         predictable current.",
                    ),
                    GuideSection::paragraph(
                        "The Formula",
                        "The resistor sees the supply voltage minus the LED's forward drop, so \
                         R = (Vs − Vf) / If. For one red LED (Vf ≈ 2 V) on a 5 V supply at \
                         20 mA: R = (5 − 2) / 0.02 = 150 Ω. With several LEDs in series, \
                         subtract each forward voltage from the supply before dividing.",
                    ),
                    GuideSection::bullets(
                        "Practical Tips",
                        vec![
                            "Round up to the next standard resistor value — slightly dimmer is safer than slightly over-driven.".to_string(),
                            "Wiring LEDs in series shares one current; wiring them in parallel on one resistor invites uneven brightness.".to_string(),
                            "Modern high-brightness LEDs are plenty visible at 5-10 mA; running below the 20 mA rating extends life.".to_string(),
                            "Ensure the supply exceeds the total forward voltage, or the LEDs will not light at all.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "When a Resistor Is Not Enough",
                        "A series resistor regulates current only as well as the supply is \
                         regulated. For battery packs that sag, automotive rails that spike, or \
                         high-power LEDs above roughly 1 W, use a constant-current driver \
                         instead — it holds If steady regardless of supply swings and wastes far \
                         less power than a large dropper resistor.",
                    ),
                ],
            },
        },
    )
}

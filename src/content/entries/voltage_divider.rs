//! Voltage divider calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "voltage-divider",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Voltage Divider Calculator".to_string(),
                steps: vec![
                    "Enter the input (source) voltage at the top of the divider.".to_string(),
                    "Enter the resistance of R1, the resistor connected to the source.".to_string(),
                    "Enter the resistance of R2, the resistor connected to ground.".to_string(),
                    "Read the output voltage taken at the junction between R1 and R2.".to_string(),
                    "Solve for a resistor instead by filling in the desired output voltage and leaving one resistance blank.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Divider Quantities".to_string(),
                items: vec![
                    MetricItem::new(
                        "Input Voltage (Vin)",
                        "The source voltage applied across the whole divider chain.",
                    ),
                    MetricItem::new(
                        "Output Voltage (Vout)",
                        "The voltage at the junction between R1 and R2, measured relative to \
                         ground. Always less than or equal to Vin.",
                    ),
                    MetricItem::new(
                        "R1 (Top Resistor)",
                        "The resistor between the source and the output node. Increasing R1 \
                         lowers the output voltage.",
                    ),
                    MetricItem::new(
                        "R2 (Bottom Resistor)",
                        "The resistor between the output node and ground. Increasing R2 raises \
                         the output voltage.",
                    ),
                    MetricItem::new(
                        "Divider Current",
                        "The quiescent current flowing through both resistors: Vin / (R1 + R2). \
                         It is drawn from the source whenever power is applied.",
                    ),
                ],
            },
            guide: Guide {
                title: "Voltage Dividers Explained".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "The Divider Formula",
                        "Two resistors in series split the source voltage in proportion to their \
                         resistances: Vout = Vin × R2 / (R1 + R2). The same current flows through \
                         both resistors, so each one drops a share of the input voltage equal to \
                         its share of the total resistance. With R1 = R2 the output is exactly \
                         half the input.",
                    ),
                    GuideSection::bullets(
                        "Typical Uses",
                        vec![
                            "Scaling a sensor signal down to an ADC's input range.".to_string(),
                            "Generating a reference or bias voltage from a supply rail.".to_string(),
                            "Reading a resistive sensor (thermistor, photoresistor) as the variable half of a divider.".to_string(),
                            "Level-shifting a 5 V logic signal down to 3.3 V for a microcontroller input.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "The Loading Effect",
                        "The divider formula assumes nothing draws current from the output node. \
                         Any real load placed on Vout sits in parallel with R2, lowering the \
                         effective bottom resistance and pulling the output below the calculated \
                         value. A common rule of thumb is to keep the load resistance at least \
                         ten times larger than R2; for anything heavier, buffer the divider with \
                         an op-amp follower.",
                    ),
                    GuideSection::paragraph(
                        "Choosing Resistor Values",
                        "The ratio sets the output voltage, but the absolute values set the \
                         trade-off. Small resistances waste power and may overheat; large \
                         resistances make the output fragile under load and more sensitive to \
                         noise. For most signal work, totals between 10 kΩ and 100 kΩ strike a \
                         reasonable balance.",
                    ),
                ],
            },
        },
    )
}

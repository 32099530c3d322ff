//! Series/parallel resistance calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "series-parallel",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Series/Parallel Resistance Calculator".to_string(),
                steps: vec![
                    "Choose series or parallel mode with the toggle at the top.".to_string(),
                    "Enter each resistor value, using the + button to add more rows.".to_string(),
                    "Pick units per row — mixing Ω, kΩ, and MΩ is fine, the calculator normalizes them.".to_string(),
                    "Read the combined equivalent resistance below the list.".to_string(),
                    "Remove a row with its × button to see how the total shifts.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Combination Terms".to_string(),
                items: vec![
                    MetricItem::new(
                        "Equivalent Resistance",
                        "The single resistance that would draw the same current from the source \
                         as the whole network.",
                    ),
                    MetricItem::new(
                        "Series Connection",
                        "Components joined end to end so the same current flows through each. \
                         Resistances simply add.",
                    ),
                    MetricItem::new(
                        "Parallel Connection",
                        "Components joined across the same two nodes so each sees the same \
                         voltage. Conductances add, so the combined resistance is always smaller \
                         than the smallest branch.",
                    ),
                ],
            },
            guide: Guide {
                title: "Combining Resistors".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "Series: Resistances Add",
                        "In a series chain the same current passes through every resistor, and \
                         the voltage drops add up. The equivalent resistance is the plain sum \
                         R = R1 + R2 + … + Rn, so it always exceeds the largest single resistor \
                         in the chain.",
                    ),
                    GuideSection::paragraph(
                        "Parallel: Conductances Add",
                        "In parallel every resistor sees the full applied voltage and contributes \
                         its own current, so it is the reciprocals that add: \
                         1/R = 1/R1 + 1/R2 + … + 1/Rn. For exactly two resistors this collapses \
                         to the product-over-sum shortcut R = (R1 × R2) / (R1 + R2).",
                    ),
                    GuideSection::bullets(
                        "Quick Checks",
                        vec![
                            "A parallel total is always below the smallest branch — if yours is not, a value was entered wrong.".to_string(),
                            "N equal resistors in parallel give exactly R/N.".to_string(),
                            "N equal resistors in series give exactly N × R.".to_string(),
                            "Adding a branch in parallel always lowers the total; adding one in series always raises it.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "Why Combine Resistors?",
                        "Real designs combine resistors to hit values the standard series skip, \
                         to spread power dissipation across several bodies, or to fine-tune a \
                         divider with a trimming resistor across one leg. Reducing a messy \
                         network to one equivalent value is also the first step of most circuit \
                         analysis — collapse the network, find the total current, then work back \
                         outward.",
                    ),
                ],
            },
        },
    )
}

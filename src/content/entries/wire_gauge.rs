//! Wire gauge calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "wire-gauge",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Wire Gauge Calculator".to_string(),
                steps: vec![
                    "Enter the current the wire must carry continuously.".to_string(),
                    "Enter the one-way run length from source to load.".to_string(),
                    "Set the supply voltage and the maximum voltage drop you can accept (3% is a common target).".to_string(),
                    "Choose conductor material — copper or aluminum.".to_string(),
                    "Read the recommended AWG size along with the actual drop and power loss at that size.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Wire Sizing Terms".to_string(),
                items: vec![
                    MetricItem::new(
                        "AWG (American Wire Gauge)",
                        "The standard North American wire size scale. Smaller numbers mean \
                         thicker wire: 10 AWG is heavier than 22 AWG.",
                    ),
                    MetricItem::new(
                        "Ampacity",
                        "The maximum continuous current a wire can carry without overheating, \
                         set by conductor size, insulation rating, and installation conditions.",
                    ),
                    MetricItem::new(
                        "Voltage Drop",
                        "The voltage lost along the wire's own resistance over the round trip. \
                         The load receives the supply voltage minus this drop.",
                    ),
                    MetricItem::new(
                        "Circular Mil",
                        "The cross-section unit behind the AWG table: the area of a circle one \
                         thousandth of an inch in diameter.",
                    ),
                ],
            },
            guide: Guide {
                title: "Choosing the Right Wire Size".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "Two Separate Limits",
                        "Wire sizing answers two independent questions. Ampacity asks whether the \
                         wire survives the current without its insulation overheating — a safety \
                         limit. Voltage drop asks whether enough voltage actually arrives at the \
                         load to do its job — a performance limit. On short runs ampacity \
                         usually decides; on long runs voltage drop takes over well before the \
                         wire is in any thermal danger.",
                    ),
                    GuideSection::bullets(
                        "Rules of Thumb",
                        vec![
                            "Every 3 AWG steps roughly halves (or doubles) the resistance.".to_string(),
                            "Every 6 AWG steps roughly doubles (or halves) the diameter.".to_string(),
                            "Keep voltage drop under 3% for power circuits, under 10% for non-critical loads.".to_string(),
                            "Aluminum needs about two AWG sizes heavier than copper for the same job.".to_string(),
                            "Low-voltage systems feel drop hardest: losing 0.6 V matters far more at 12 V than at 120 V.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "Calculating Voltage Drop",
                        "Drop is plain Ohm's law applied to the cable: Vdrop = I × Rwire, where \
                         Rwire covers the full out-and-back length. A 10 m run means 20 m of \
                         conductor. For 18 AWG copper at about 21 mΩ per meter, a 5 A load over \
                         that run loses 5 × 0.42 = 2.1 V — already 17% of a 12 V supply, which \
                         is why thin bench leads sag under load.",
                    ),
                    GuideSection::paragraph(
                        "Safety Margins",
                        "Ampacity tables assume fixed conditions — bundled conductors, enclosed \
                         spaces, and high ambient temperatures all reduce what a wire can safely \
                         carry. Treat the calculator's recommendation as a minimum, round up when \
                         a run is borderline, and follow your local electrical code for anything \
                         connected to mains wiring.",
                    ),
                ],
            },
        },
    )
}

//! Battery life calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "battery-life",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Battery Life Calculator".to_string(),
                steps: vec![
                    "Enter the battery capacity in milliamp-hours (mAh), from the label or datasheet.".to_string(),
                    "Enter the average current your device draws, in mA.".to_string(),
                    "Adjust the derating factor if you want a more conservative estimate (70% is the default).".to_string(),
                    "Read the estimated runtime in hours and days.".to_string(),
                    "For duty-cycled devices, enter active and sleep currents with their time shares to get a weighted average draw.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Battery Terms".to_string(),
                items: vec![
                    MetricItem::new(
                        "Capacity (mAh)",
                        "How much charge the battery stores: a 2000 mAh cell can nominally \
                         supply 2000 mA for one hour, or 200 mA for ten hours.",
                    ),
                    MetricItem::new(
                        "Average Current Draw",
                        "The mean current your device pulls over a full operating cycle, \
                         including sleep periods.",
                    ),
                    MetricItem::new(
                        "Derating Factor",
                        "A multiplier below 100% that accounts for real-world losses: \
                         temperature, aging, self-discharge, and cutoff voltage.",
                    ),
                    MetricItem::new(
                        "C-rate",
                        "Discharge current expressed relative to capacity. Drawing 1000 mA from \
                         a 2000 mAh cell is a 0.5C discharge.",
                    ),
                    MetricItem::new(
                        "Self-discharge",
                        "Charge a battery loses just sitting idle. Negligible over days, but \
                         significant for devices meant to run for months.",
                    ),
                ],
            },
            guide: Guide {
                title: "Estimating Battery Runtime".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "The Basic Estimate",
                        "At its simplest, runtime in hours is capacity divided by draw: a \
                         2000 mAh battery feeding a 50 mA load runs about 40 hours. Real \
                         batteries fall short of the label under load, which is why the \
                         calculator applies a derating factor — at the default 70%, that same \
                         setup is estimated at 28 hours, a figure much closer to what you will \
                         measure.",
                    ),
                    GuideSection::bullets(
                        "Why Real Runtime Is Shorter",
                        vec![
                            "Rated capacity is measured at a gentle discharge rate; heavier loads deliver less total energy.".to_string(),
                            "Cold temperatures can cut usable capacity by 30% or more.".to_string(),
                            "Cells lose capacity with age and charge cycles.".to_string(),
                            "Devices shut down at a cutoff voltage, stranding some charge in the cell.".to_string(),
                            "Voltage converters between battery and load are only 80-95% efficient.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "Duty-Cycled Devices",
                        "Battery-powered sensors spend most of their life asleep. The number \
                         that matters is the weighted average draw: a node that wakes for \
                         2 seconds at 80 mA every 10 minutes and sleeps at 20 µA in between \
                         averages well under 1 mA, and a pair of AA cells can feed it for many \
                         months. Shortening the active window usually buys more runtime than any \
                         bigger battery.",
                    ),
                    GuideSection::paragraph(
                        "Reading the Estimate",
                        "Treat the result as a planning figure, not a guarantee. If the \
                         estimate comes out within a factor of two of your requirement, \
                         prototype and measure the actual draw — a single firmware bug that \
                         blocks sleep mode will do more to your battery budget than any \
                         parameter in this calculator.",
                    ),
                ],
            },
        },
    )
}

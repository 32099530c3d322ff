//! Capacitor code calculator help content

use crate::types::{ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem};

pub(super) fn entry() -> (&'static str, ContentEntry) {
    (
        "capacitor-code",
        ContentEntry {
            how_to_use: HowToUse {
                title: "How to Use the Capacitor Code Calculator".to_string(),
                steps: vec![
                    "Type the three-digit code printed on the capacitor body (e.g. 104).".to_string(),
                    "Add the tolerance letter if one is printed after the digits (e.g. 104K).".to_string(),
                    "Read the capacitance in picofarads, nanofarads, and microfarads.".to_string(),
                    "Use reverse mode to enter a capacitance and get the code to look for.".to_string(),
                ],
            },
            metrics: MetricGlossary {
                title: "Capacitance Terms".to_string(),
                items: vec![
                    MetricItem::new(
                        "Capacitance",
                        "A component's ability to store charge per volt applied, measured in \
                         farads. Practical parts range from picofarads to millifarads.",
                    ),
                    MetricItem::new(
                        "Picofarad (pF)",
                        "One trillionth of a farad (10⁻¹² F). The base unit for capacitor codes.",
                    ),
                    MetricItem::new(
                        "Nanofarad (nF)",
                        "One billionth of a farad. 1 nF = 1000 pF; a 104 code equals 100 nF.",
                    ),
                    MetricItem::new(
                        "Microfarad (µF)",
                        "One millionth of a farad. 1 µF = 1000 nF. Electrolytics are usually \
                         marked directly in µF rather than coded.",
                    ),
                    MetricItem::new(
                        "Tolerance Letter",
                        "A letter after the digits giving the tolerance: J = ±5%, K = ±10%, \
                         M = ±20%.",
                    ),
                ],
            },
            guide: Guide {
                title: "Decoding Capacitor Markings".to_string(),
                sections: vec![
                    GuideSection::paragraph(
                        "The Three-Digit System",
                        "Small ceramic and film capacitors carry a three-digit code in the same \
                         spirit as resistor color bands: the first two digits are significant \
                         figures and the third is the number of zeros to append, with the result \
                         in picofarads. So 104 reads as 10 followed by four zeros — 100 000 pF, \
                         which is 100 nF or 0.1 µF.",
                    ),
                    GuideSection::bullets(
                        "Reading the Code",
                        vec![
                            "Digits one and two are the significant figures.".to_string(),
                            "Digit three is the multiplier: the count of zeros to append, in picofarads.".to_string(),
                            "Codes below 100 (like 47) are plain picofarad values with no multiplier.".to_string(),
                            "A letter after the digits is the tolerance, not part of the value.".to_string(),
                            "Values printed with a decimal point (like 4.7) are usually in µF on electrolytics.".to_string(),
                        ],
                    ),
                    GuideSection::bullets(
                        "Common Codes",
                        vec![
                            "101 = 100 pF — RF and oscillator circuits.".to_string(),
                            "102 = 1 nF — snubbers and filters.".to_string(),
                            "103 = 10 nF — general-purpose decoupling.".to_string(),
                            "104 = 100 nF — the classic logic-IC bypass capacitor.".to_string(),
                            "474 = 470 nF — audio coupling and timing.".to_string(),
                        ],
                    ),
                    GuideSection::paragraph(
                        "Beyond the Value",
                        "The code tells you capacitance and tolerance but not voltage rating or \
                         dielectric, both of which matter in practice. A 104 rated for 16 V will \
                         fail on a 48 V rail, and a Y5V dielectric can lose half its capacitance \
                         at temperature extremes where a C0G part barely moves. When replacing a \
                         capacitor, match the value and meet or exceed the rating and dielectric \
                         grade of the original.",
                    ),
                ],
            },
        },
    )
}

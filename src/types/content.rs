//! Help content types: ContentEntry, HowToUse, MetricGlossary, Guide,
//! GuideSection, SectionContent

use serde::{Deserialize, Serialize};

/// Complete help/education content for one calculator widget.
///
/// Every entry carries all three blocks — there are no partial entries.
/// Field names serialize in camelCase to match the dashboard contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub how_to_use: HowToUse,
    pub metrics: MetricGlossary,
    pub guide: Guide,
}

/// Ordered usage instructions. Step order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToUse {
    pub title: String,
    pub steps: Vec<String>,
}

/// Glossary of the metrics/terms the calculator works with.
///
/// Terms are expected to be unique within one entry, but uniqueness is an
/// authoring convention, not enforced here. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricGlossary {
    pub title: String,
    pub items: Vec<MetricItem>,
}

/// One term/definition pair in the metric glossary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricItem {
    pub term: String,
    pub definition: String,
}

/// Long-form educational guide, rendered as an accordion of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    pub sections: Vec<GuideSection>,
}

/// One titled subsection of the guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub content: SectionContent,
}

/// Body of a guide section: narrative prose or an enumerated list.
///
/// Serializes untagged, so the wire shape is `string | string[]` — the
/// renderer shows a paragraph for `Paragraph` and a bulleted list for
/// `Bullets`. The two shapes are authored deliberately; do not collapse one
/// into the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Paragraph(String),
    Bullets(Vec<String>),
}

impl SectionContent {
    #[must_use]
    pub const fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph(_))
    }

    #[must_use]
    pub const fn is_bullets(&self) -> bool {
        matches!(self, Self::Bullets(_))
    }
}

impl MetricItem {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

impl GuideSection {
    /// Section whose body is a single prose paragraph.
    pub fn paragraph(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: SectionContent::Paragraph(text.into()),
        }
    }

    /// Section whose body is a bulleted list.
    pub fn bullets(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content: SectionContent::Bullets(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_content_serializes_untagged() {
        let prose = SectionContent::Paragraph("Ohm's law relates V, I and R.".to_string());
        let json = serde_json::to_value(&prose).unwrap();
        assert!(json.is_string(), "Paragraph must serialize as a bare string");

        let bullets = SectionContent::Bullets(vec!["first".to_string(), "second".to_string()]);
        let json = serde_json::to_value(&bullets).unwrap();
        assert!(json.is_array(), "Bullets must serialize as a string array");
    }

    #[test]
    fn test_section_content_deserializes_both_shapes() {
        let prose: SectionContent = serde_json::from_str("\"some prose\"").unwrap();
        assert!(prose.is_paragraph());

        let bullets: SectionContent = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert!(bullets.is_bullets());
    }

    #[test]
    fn test_entry_fields_serialize_camel_case() {
        let entry = ContentEntry {
            how_to_use: HowToUse {
                title: "t".to_string(),
                steps: vec!["s".to_string()],
            },
            metrics: MetricGlossary {
                title: "t".to_string(),
                items: vec![MetricItem::new("term", "definition")],
            },
            guide: Guide {
                title: "t".to_string(),
                sections: vec![GuideSection::paragraph("t", "body")],
            },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("howToUse").is_some(), "frontend expects camelCase keys");
        assert!(json.get("how_to_use").is_none());
    }
}

//! CircuitCalc Content: educational help content for the calculator suite
//!
//! Keyed repository of structured help content for the dashboard's calculator
//! widgets. Each calculator identifier maps to one fixed-shape entry with
//! three blocks the UI renders as accordion panels:
//!
//! - **How to Use**: ordered usage steps
//! - **Metric Glossary**: term/definition pairs
//! - **Guide**: long-form sections, each either prose or a bulleted list
//!
//! The only behavior is lookup: `get_content(id)` returns `Some(entry)` for a
//! known calculator and `None` otherwise. Calculator arithmetic and UI
//! rendering live elsewhere; this crate owns the content and its shape.

pub mod content;
pub mod types;

// Re-export the lookup surface
pub use content::{get_content, repository, ContentRepository};

// Re-export the content schema
pub use types::{
    ContentEntry, Guide, GuideSection, HowToUse, MetricGlossary, MetricItem, SectionContent,
};

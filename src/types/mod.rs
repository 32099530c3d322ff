//! Shared data structures for calculator help content
//!
//! This module defines the fixed shape every calculator's educational content
//! must satisfy so the dashboard can render all entries uniformly:
//! - `HowToUse`: ordered usage steps
//! - `MetricGlossary`: term/definition pairs for the on-screen glossary
//! - `Guide`: long-form guide split into titled sections, each either prose
//!   or a bulleted list (`SectionContent`)

mod content;

pub use content::*;

//! Na-Jia (納甲) six-line divination rule engine.
//!
//! This crate provides:
//! - Six-line structures, moving lines, and hexagram name lookups
//! - Per-line Na-Jia assignment: stem, branch, element, relation, spirit,
//!   self/counterpart marks and void flags
//! - Hidden relations borrowed from the palace root hexagram
//! - Month strength, day/month clash and combination, six-clash/six-harmony
//! - Use-god selection by topic and the one-shot [`divine`] composition
//!
//! Everything here is pure: output depends only on the inputs, and the
//! reference tables in `najia_tables` are read-only statics.

pub mod assign;
pub mod divine;
pub mod error;
pub mod hidden;
pub mod interaction;
pub mod report_types;
pub mod resolver;
pub mod use_god;

pub use assign::{analyze, assign_visible, najia_pair};
pub use divine::{changed_report, divine};
pub use error::NajiaError;
pub use hidden::resolve_hidden;
pub use interaction::{evaluate_interactions, special_pattern, strength};
pub use report_types::{
    ChangedReport, DivinationReport, DivinationRequest, HexagramReport, HiddenLine,
    InteractionReport, LineChange, LineInfo, LineInteraction, LineRole, LineSnapshot,
    SpecialPattern, Strength, UseGodLine, UseGodReport,
};
pub use resolver::{
    HexagramLookup, LineStructure, MovingLines, UNKNOWN_HEXAGRAM, changed_hexagram_name,
    hexagram_from_lines, interlocking_hexagram, structure_of,
};
pub use use_god::{ALL_TOPICS, Topic, lines_with_relation, use_god_lines, use_god_report};

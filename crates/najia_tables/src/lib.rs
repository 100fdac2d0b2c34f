//! Fixed reference data for Na-Jia (納甲) line divination.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and their elements
//! - The five-element generating/overcoming cycles
//! - The 8 trigrams with their Na-Jia stem/branch rules
//! - The 64 hexagrams and the 8 Jing Fang palaces with generation order
//! - Kinship relations, the six guardian spirits, branch clashes/combinations
//! - Sectional solar terms bounding the month branches
//!
//! Every table is immutable `const`/`static` data.

pub mod branch_relation;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod hexagram;
pub mod kinship;
pub mod palace;
pub mod solar_term;
pub mod spirit;
pub mod trigram;

pub use branch_relation::{
    SIX_CLASHES, SIX_COMBINATIONS, clash_partner, clashes, combine_partner, combines,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation};
pub use error::LabelError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem, is_sexagenary_pair};
pub use hexagram::{
    HEXAGRAMS, Hexagram, LINE_POSITION_NAMES, hexagram_by_lines, hexagram_by_name,
    hexagram_by_trigrams, line_position_name,
};
pub use kinship::{ALL_KINSHIPS, Kinship, KinshipSet, classify_kinship};
pub use palace::{ALL_GENERATIONS, Generation, PALACES, Palace, palace_for_trigram, palace_of};
pub use solar_term::{
    SOLAR_TERMS, SolarTerm, month_branch, month_branch_from_month0, solar_term_for_month,
};
pub use spirit::{SPIRIT_CYCLE, Spirit, spirit_for_line, spirit_start_index};
pub use trigram::{ALL_TRIGRAMS, Trigram, Yao};

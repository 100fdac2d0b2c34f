//! The six relatives (六親), in practice five kinship relations.
//!
//! A line's relation is read from its branch element against the palace
//! element, taking the palace as "self":
//! - same element → 兄弟 (sibling)
//! - generates the palace → 父母 (parent)
//! - generated by the palace → 子孫 (offspring)
//! - overcome by the palace → 妻財 (spouse-wealth)
//! - overcomes the palace → 官鬼 (official-ghost)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementRelation};
use crate::error::LabelError;

/// Kinship relation of a line to its palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kinship {
    #[serde(rename = "兄弟")]
    Sibling,
    #[serde(rename = "子孫")]
    Offspring,
    #[serde(rename = "妻財")]
    Wealth,
    #[serde(rename = "官鬼")]
    Official,
    #[serde(rename = "父母")]
    Parent,
}

/// All 5 relations.
pub const ALL_KINSHIPS: [Kinship; 5] = [
    Kinship::Sibling,
    Kinship::Offspring,
    Kinship::Wealth,
    Kinship::Official,
    Kinship::Parent,
];

impl Kinship {
    /// Traditional label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sibling => "兄弟",
            Self::Offspring => "子孫",
            Self::Wealth => "妻財",
            Self::Official => "官鬼",
            Self::Parent => "父母",
        }
    }

    /// English label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Sibling => "sibling",
            Self::Offspring => "offspring",
            Self::Wealth => "spouse-wealth",
            Self::Official => "official-ghost",
            Self::Parent => "parent",
        }
    }

    /// Bit used in [`KinshipSet`].
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Kinship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kinship {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_KINSHIPS
            .iter()
            .copied()
            .find(|k| k.name() == s || k.english_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelError::new("relation", s))
    }
}

/// Relation of a line element to the palace element.
pub fn classify_kinship(line: Element, palace: Element) -> Kinship {
    match palace.relation_to(line) {
        ElementRelation::Same => Kinship::Sibling,
        ElementRelation::GeneratedBy => Kinship::Parent,
        ElementRelation::Generates => Kinship::Offspring,
        ElementRelation::Overcomes => Kinship::Wealth,
        ElementRelation::OvercomeBy => Kinship::Official,
    }
}

/// A small set of relations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KinshipSet(u8);

impl KinshipSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, kinship: Kinship) {
        self.0 |= kinship.bit();
    }

    pub const fn contains(self, kinship: Kinship) -> bool {
        self.0 & kinship.bit() != 0
    }

    /// Whether all 5 relations are present.
    pub const fn is_complete(self) -> bool {
        self.0 == 0b1_1111
    }

    /// Relations not in the set, in [`ALL_KINSHIPS`] order.
    pub fn missing(self) -> Vec<Kinship> {
        ALL_KINSHIPS
            .iter()
            .copied()
            .filter(|k| !self.contains(*k))
            .collect()
    }
}

impl FromIterator<Kinship> for KinshipSet {
    fn from_iter<I: IntoIterator<Item = Kinship>>(iter: I) -> Self {
        let mut set = Self::new();
        for k in iter {
            set.insert(k);
        }
        set
    }
}

//! Use-god (用神) selection by inquiry topic.

use std::str::FromStr;

use najia_tables::{Kinship, LabelError};
use serde::{Deserialize, Serialize};

use crate::report_types::{HexagramReport, LineInfo, UseGodLine, UseGodReport};

/// Inquiry topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "事業")]
    Career,
    #[serde(rename = "財運")]
    Wealth,
    #[serde(rename = "健康")]
    Health,
    #[serde(rename = "感情")]
    Relationship,
    #[serde(rename = "考試")]
    Exam,
}

pub const ALL_TOPICS: [Topic; 5] = [
    Topic::Career,
    Topic::Wealth,
    Topic::Health,
    Topic::Relationship,
    Topic::Exam,
];

impl Topic {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "事業",
            Self::Wealth => "財運",
            Self::Health => "健康",
            Self::Relationship => "感情",
            Self::Exam => "考試",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Relationship => "relationship",
            Self::Exam => "exam",
        }
    }

    /// Relations that stand for the matter asked about.
    pub const fn targets(self) -> &'static [Kinship] {
        match self {
            Self::Career | Self::Health => &[Kinship::Official],
            Self::Wealth => &[Kinship::Wealth],
            Self::Relationship => &[Kinship::Wealth, Kinship::Official],
            Self::Exam => &[Kinship::Parent],
        }
    }

    /// Reading hint.
    pub const fn guide(self) -> &'static str {
        match self {
            Self::Career => "以「官鬼爻」為主。",
            Self::Wealth => "以「妻財爻」為主。",
            Self::Health => "觀「官鬼爻」是否旺相（鬼旺為病）。",
            Self::Relationship => "男看財、女看官。",
            Self::Exam => "取「父母爻」。",
        }
    }

    pub const fn all() -> &'static [Topic; 5] {
        &ALL_TOPICS
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = LabelError;

    /// Accepts the Chinese label or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_TOPICS
            .into_iter()
            .find(|t| t.name() == s || t.english_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelError::new("topic", s))
    }
}

/// Visible lines carrying one relation.
pub fn lines_with_relation(report: &HexagramReport, relation: Kinship) -> Vec<&LineInfo> {
    report
        .lines
        .iter()
        .filter(|l| l.relation == relation)
        .collect()
}

/// Every line whose visible or hidden relation is one of the topic's targets.
pub fn use_god_lines(report: &HexagramReport, topic: Topic) -> Vec<UseGodLine> {
    let targets = topic.targets();
    let mut found = Vec::new();
    for line in &report.lines {
        if targets.contains(&line.relation) {
            found.push(UseGodLine {
                position: line.position,
                position_name: line.position_name,
                relation: line.relation,
                stem: line.stem,
                branch: line.branch,
                element: line.element,
                hidden: false,
            });
        }
        if let Some(h) = line.hidden.filter(|h| targets.contains(&h.relation)) {
            found.push(UseGodLine {
                position: line.position,
                position_name: line.position_name,
                relation: h.relation,
                stem: h.stem,
                branch: h.branch,
                element: h.element,
                hidden: true,
            });
        }
    }
    found
}

/// Use-god section for a topic.
pub fn use_god_report(report: &HexagramReport, topic: Topic) -> UseGodReport {
    UseGodReport {
        topic,
        targets: topic.targets().to_vec(),
        guide: topic.guide(),
        lines: use_god_lines(report, topic),
    }
}

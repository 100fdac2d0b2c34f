//! Types for analysis results.

use najia_tables::{
    Branch, Element, Generation, Kinship, KinshipSet, Spirit, Stem, Trigram, Yao,
};
use najia_time::DayInfo;
use serde::Serialize;

use crate::use_god::Topic;

/// Self (世) or counterpart (應) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineRole {
    #[serde(rename = "世")]
    SelfLine,
    #[serde(rename = "應")]
    Counterpart,
}

impl LineRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SelfLine => "世",
            Self::Counterpart => "應",
        }
    }
}

/// A relation absent from the visible lines, borrowed from the palace root
/// hexagram at the same position (伏神).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenLine {
    pub relation: Kinship,
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
}

/// One analysed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    /// 1-based position, bottom first.
    pub position: u8,
    /// Traditional position label (初爻 … 上爻).
    pub position_name: &'static str,
    pub yao: Yao,
    pub stem: Stem,
    pub branch: Branch,
    /// Element of the branch.
    pub element: Element,
    /// Kinship relation to the palace element.
    pub relation: Kinship,
    pub spirit: Spirit,
    pub role: Option<LineRole>,
    /// Branch is void (空亡) on the query day.
    pub is_void: bool,
    pub hidden: Option<HiddenLine>,
}

/// Na-Jia analysis of one hexagram for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramReport {
    pub name: &'static str,
    /// Position in the received sequence (1-64).
    pub number: u8,
    pub upper: Trigram,
    pub lower: Trigram,
    /// Trigram heading the owning palace.
    pub palace: Trigram,
    pub palace_element: Element,
    pub generation: Generation,
    /// Position of the self line (世).
    pub self_line: u8,
    /// Position of the counterpart line (應).
    pub counterpart_line: u8,
    pub day_stem: Stem,
    pub voids: [Branch; 2],
    /// Lines bottom first.
    pub lines: [LineInfo; 6],
}

impl HexagramReport {
    /// Line at a 1-based position.
    pub fn line(&self, position: u8) -> Option<&LineInfo> {
        position
            .checked_sub(1)
            .and_then(|i| self.lines.get(i as usize))
    }

    /// Relations carried by the six visible lines.
    pub fn present_relations(&self) -> KinshipSet {
        self.lines.iter().map(|l| l.relation).collect()
    }

    /// "乾宮本宮卦"-style placement label.
    pub fn placement(&self) -> String {
        format!("{}宮{}", self.palace.name(), self.generation.name())
    }
}

/// Visible attributes of a line, before or after it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSnapshot {
    pub yao: Yao,
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
    pub relation: Kinship,
}

impl From<&LineInfo> for LineSnapshot {
    fn from(line: &LineInfo) -> Self {
        Self {
            yao: line.yao,
            stem: line.stem,
            branch: line.branch,
            element: line.element,
            relation: line.relation,
        }
    }
}

/// What one moving line becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub position: u8,
    pub position_name: &'static str,
    pub before: LineSnapshot,
    /// The line as analysed within the changed hexagram's own palace.
    pub after: LineSnapshot,
    /// The changed line's relation read against the primary palace element.
    pub relation_to_primary: Kinship,
}

/// Changed hexagram (變卦) analysis plus per-moving-line deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedReport {
    pub report: HexagramReport,
    pub changes: Vec<LineChange>,
}

/// Line strength against the month element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strength {
    /// Same element as the month (旺).
    #[serde(rename = "旺")]
    Prosperous,
    /// Generated by the month (相).
    #[serde(rename = "相")]
    Strong,
    /// Generates the month (休).
    #[serde(rename = "休")]
    Weakened,
    /// Overcome by the month (囚).
    #[serde(rename = "囚")]
    Imprisoned,
    /// Overcomes the month (死).
    #[serde(rename = "死")]
    Dead,
}

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prosperous => "旺",
            Self::Strong => "相",
            Self::Weakened => "休",
            Self::Imprisoned => "囚",
            Self::Dead => "死",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Prosperous => "prosperous",
            Self::Strong => "strong",
            Self::Weakened => "weakened",
            Self::Imprisoned => "imprisoned",
            Self::Dead => "dead",
        }
    }
}

/// Day and month effects on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineInteraction {
    pub position: u8,
    pub strength: Strength,
    /// Clashed by the day branch (暗動).
    pub secretly_moving: bool,
    /// Clashed by the month branch (月破).
    pub month_broken: bool,
    /// Combines with the day branch (合日).
    pub combines_day: bool,
    /// Combines with the month branch (合月).
    pub combines_month: bool,
}

impl LineInteraction {
    /// Labels in display order: strength first, then day/month flags.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.strength.name()];
        let flags = [
            (self.secretly_moving, "暗動"),
            (self.month_broken, "月破"),
            (self.combines_day, "合日"),
            (self.combines_month, "合月"),
        ];
        tags.extend(flags.iter().filter(|(set, _)| *set).map(|(_, tag)| *tag));
        tags
    }
}

/// Whole-hexagram pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialPattern {
    /// Lines 1/4, 2/5 and 3/6 all clash (六沖卦).
    #[serde(rename = "六沖卦")]
    SixClash,
    /// Every line is a sibling of the palace.
    #[serde(rename = "六沖卦（純宮）")]
    PurePalaceClash,
    /// Lines 1/4, 2/5 and 3/6 all combine (六合卦).
    #[serde(rename = "六合卦")]
    SixHarmony,
}

impl SpecialPattern {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SixClash => "六沖卦",
            Self::PurePalaceClash => "六沖卦（純宮）",
            Self::SixHarmony => "六合卦",
        }
    }
}

/// Interaction section of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionReport {
    pub special: Option<SpecialPattern>,
    pub lines: [LineInteraction; 6],
}

/// A line carrying a use-god relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseGodLine {
    pub position: u8,
    pub position_name: &'static str,
    pub relation: Kinship,
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
    /// Found only as a hidden annotation.
    pub hidden: bool,
}

/// Use-god (用神) section for an inquiry topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseGodReport {
    pub topic: Topic,
    pub targets: Vec<Kinship>,
    pub guide: &'static str,
    pub lines: Vec<UseGodLine>,
}

/// Input to a one-shot divination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivinationRequest {
    pub lines: crate::resolver::LineStructure,
    pub date: chrono::NaiveDate,
    pub moving: crate::resolver::MovingLines,
    pub topic: Option<Topic>,
}

/// Full result of a one-shot divination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivinationReport {
    pub day: DayInfo,
    pub voids: [Branch; 2],
    pub primary: HexagramReport,
    /// Interlocking hexagram (互卦) name.
    pub interlocking: &'static str,
    /// Moving positions, ascending.
    pub moving: Vec<u8>,
    pub changed: Option<ChangedReport>,
    pub interactions: InteractionReport,
    pub use_god: Option<UseGodReport>,
}

//! The eight trigrams (八卦) and their Na-Jia stem/branch rules.
//!
//! Each trigram carries two stems and two branch triplets: one pair used when
//! it occupies the lower half of a hexagram (lines 1-3), the other when it
//! occupies the upper half (lines 4-6). Only 乾 and 坤 differ between halves
//! in their stems.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::LabelError;
use crate::ganzhi::{Branch, Stem};

/// A single line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yao {
    /// Broken line, encoded 0.
    Yin,
    /// Solid line, encoded 1.
    Yang,
}

impl Yao {
    /// 0 for yin, 1 for yang.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Decode 0/1; any other value is `None`.
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Yin),
            1 => Some(Self::Yang),
            _ => None,
        }
    }

    /// The opposite line.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// Chart glyph: "—" for yang, "--" for yin.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Yin => "--",
            Self::Yang => "—",
        }
    }
}

/// The 8 trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    #[serde(rename = "乾")]
    Qian,
    #[serde(rename = "兌")]
    Dui,
    #[serde(rename = "離")]
    Li,
    #[serde(rename = "震")]
    Zhen,
    #[serde(rename = "巽")]
    Xun,
    #[serde(rename = "坎")]
    Kan,
    #[serde(rename = "艮")]
    Gen,
    #[serde(rename = "坤")]
    Kun,
}

/// All 8 trigrams in Fu Xi order.
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

use Yao::{Yang, Yin};

impl Trigram {
    /// Chinese name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兌",
            Self::Li => "離",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Qian => "qian",
            Self::Dui => "dui",
            Self::Li => "li",
            Self::Zhen => "zhen",
            Self::Xun => "xun",
            Self::Kan => "kan",
            Self::Gen => "gen",
            Self::Kun => "kun",
        }
    }

    /// Natural image used in compound hexagram names (天 澤 火 雷 風 水 山 地).
    pub const fn image(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Dui => "澤",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "風",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
        }
    }

    /// Line structure, bottom line first.
    pub const fn lines(self) -> [Yao; 3] {
        match self {
            Self::Qian => [Yang, Yang, Yang],
            Self::Dui => [Yang, Yang, Yin],
            Self::Li => [Yang, Yin, Yang],
            Self::Zhen => [Yang, Yin, Yin],
            Self::Xun => [Yin, Yang, Yang],
            Self::Kan => [Yin, Yang, Yin],
            Self::Gen => [Yin, Yin, Yang],
            Self::Kun => [Yin, Yin, Yin],
        }
    }

    /// Element of the trigram, which is also the element of its palace.
    pub const fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// Stem used when the trigram sits in the lower half.
    pub const fn lower_stem(self) -> Stem {
        match self {
            Self::Qian => Stem::Jia,
            Self::Kun => Stem::Yi,
            Self::Zhen => Stem::Geng,
            Self::Xun => Stem::Xin,
            Self::Kan => Stem::Wu,
            Self::Li => Stem::Ji,
            Self::Gen => Stem::Bing,
            Self::Dui => Stem::Ding,
        }
    }

    /// Stem used when the trigram sits in the upper half.
    pub const fn upper_stem(self) -> Stem {
        match self {
            Self::Qian => Stem::Ren,
            Self::Kun => Stem::Gui,
            other => other.lower_stem(),
        }
    }

    /// Branches for lines 1-3 when the trigram sits in the lower half.
    pub const fn lower_branches(self) -> [Branch; 3] {
        match self {
            Self::Qian | Self::Zhen => [Branch::Zi, Branch::Yin, Branch::Chen],
            Self::Kun => [Branch::Wei, Branch::Si, Branch::Mao],
            Self::Xun => [Branch::Chou, Branch::Hai, Branch::You],
            Self::Kan => [Branch::Yin, Branch::Chen, Branch::Wu],
            Self::Li => [Branch::Mao, Branch::Chou, Branch::Hai],
            Self::Gen => [Branch::Chen, Branch::Wu, Branch::Shen],
            Self::Dui => [Branch::Si, Branch::Mao, Branch::Chou],
        }
    }

    /// Branches for lines 4-6 when the trigram sits in the upper half.
    pub const fn upper_branches(self) -> [Branch; 3] {
        match self {
            Self::Qian | Self::Zhen => [Branch::Wu, Branch::Shen, Branch::Xu],
            Self::Kun => [Branch::Chou, Branch::Hai, Branch::You],
            Self::Xun => [Branch::Wei, Branch::Si, Branch::Mao],
            Self::Kan => [Branch::Shen, Branch::Xu, Branch::Zi],
            Self::Li => [Branch::You, Branch::Wei, Branch::Si],
            Self::Gen => [Branch::Xu, Branch::Zi, Branch::Yin],
            Self::Dui => [Branch::Hai, Branch::You, Branch::Wei],
        }
    }

    /// Trigram with the given three lines (bottom first).
    pub fn from_lines(lines: [Yao; 3]) -> Trigram {
        // Every 3-line pattern is one of the 8 trigrams.
        match lines {
            [Yang, Yang, Yang] => Self::Qian,
            [Yang, Yang, Yin] => Self::Dui,
            [Yang, Yin, Yang] => Self::Li,
            [Yang, Yin, Yin] => Self::Zhen,
            [Yin, Yang, Yang] => Self::Xun,
            [Yin, Yang, Yin] => Self::Kan,
            [Yin, Yin, Yang] => Self::Gen,
            [Yin, Yin, Yin] => Self::Kun,
        }
    }

    /// All 8 trigrams.
    pub const fn all() -> &'static [Trigram; 8] {
        &ALL_TRIGRAMS
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trigram {
    type Err = LabelError;

    /// Accepts the trigram name, its image, or the pinyin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_TRIGRAMS
            .iter()
            .copied()
            .find(|t| t.name() == s || t.image() == s || t.pinyin().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelError::new("trigram", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structures_are_distinct_and_invertible() {
        for t in ALL_TRIGRAMS {
            assert_eq!(Trigram::from_lines(t.lines()), t, "{t}");
        }
    }

    #[test]
    fn qian_and_kun_switch_stems() {
        assert_eq!(Trigram::Qian.lower_stem(), Stem::Jia);
        assert_eq!(Trigram::Qian.upper_stem(), Stem::Ren);
        assert_eq!(Trigram::Kun.lower_stem(), Stem::Yi);
        assert_eq!(Trigram::Kun.upper_stem(), Stem::Gui);
        for t in [
            Trigram::Dui,
            Trigram::Li,
            Trigram::Zhen,
            Trigram::Xun,
            Trigram::Kan,
            Trigram::Gen,
        ] {
            assert_eq!(t.lower_stem(), t.upper_stem(), "{t}");
        }
    }

    #[test]
    fn yang_trigram_branches_step_forward() {
        // Yang trigrams walk the branches forward by two.
        for t in [Trigram::Qian, Trigram::Zhen, Trigram::Kan, Trigram::Gen] {
            let b: Vec<u8> = t
                .lower_branches()
                .iter()
                .chain(t.upper_branches().iter())
                .map(|b| b.index())
                .collect();
            for pair in b.windows(2) {
                assert_eq!((pair[0] + 2) % 12, pair[1], "{t}");
            }
        }
    }

    #[test]
    fn yin_trigram_branches_step_backward() {
        for t in [Trigram::Kun, Trigram::Xun, Trigram::Li, Trigram::Dui] {
            let b: Vec<u8> = t
                .lower_branches()
                .iter()
                .chain(t.upper_branches().iter())
                .map(|b| b.index())
                .collect();
            for pair in b.windows(2) {
                assert_eq!((pair[1] + 2) % 12, pair[0], "{t}");
            }
        }
    }

    #[test]
    fn parse_by_name_image_pinyin() {
        assert_eq!("兌".parse::<Trigram>().unwrap(), Trigram::Dui);
        assert_eq!("風".parse::<Trigram>().unwrap(), Trigram::Xun);
        assert_eq!("kan".parse::<Trigram>().unwrap(), Trigram::Kan);
        assert!("x".parse::<Trigram>().is_err());
    }

    #[test]
    fn yao_bits() {
        assert_eq!(Yao::from_bit(0), Some(Yao::Yin));
        assert_eq!(Yao::from_bit(1), Some(Yao::Yang));
        assert_eq!(Yao::from_bit(2), None);
        assert_eq!(Yao::Yin.flipped(), Yao::Yang);
    }
}

//! The 64 hexagrams (六十四卦) and their six-line structures.
//!
//! Each hexagram is stored as its (upper, lower) trigram pair; the six-line
//! structure is derived from the pair, so every structure appears exactly
//! once. Compound names read upper image, lower image, then the hexagram's
//! own name (水雷屯 = 坎 over 震); the eight doubled trigrams read "X為Y".
//!
//! Table order is the received (King Wen) sequence.

use serde::Serialize;

use crate::trigram::{Trigram, Yao};

/// A named six-line figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hexagram {
    /// 1-based position in the received sequence.
    pub number: u8,
    /// Full traditional name, e.g. "澤天夬".
    pub name: &'static str,
    /// Trigram on lines 4-6.
    pub upper: Trigram,
    /// Trigram on lines 1-3.
    pub lower: Trigram,
}

impl Hexagram {
    /// Six-line structure, bottom line first.
    pub const fn lines(&self) -> [Yao; 6] {
        let lo = self.lower.lines();
        let up = self.upper.lines();
        [lo[0], lo[1], lo[2], up[0], up[1], up[2]]
    }

    /// Whether the hexagram doubles a single trigram (八純卦).
    pub fn is_pure(&self) -> bool {
        self.upper == self.lower
    }
}

const fn hex(number: u8, name: &'static str, upper: Trigram, lower: Trigram) -> Hexagram {
    Hexagram {
        number,
        name,
        upper,
        lower,
    }
}

use Trigram::{Dui, Gen, Kan, Kun, Li, Qian, Xun, Zhen};

/// All 64 hexagrams in received order.
pub static HEXAGRAMS: [Hexagram; 64] = [
    hex(1, "乾為天", Qian, Qian),
    hex(2, "坤為地", Kun, Kun),
    hex(3, "水雷屯", Kan, Zhen),
    hex(4, "山水蒙", Gen, Kan),
    hex(5, "水天需", Kan, Qian),
    hex(6, "天水訟", Qian, Kan),
    hex(7, "地水師", Kun, Kan),
    hex(8, "水地比", Kan, Kun),
    hex(9, "風天小畜", Xun, Qian),
    hex(10, "天澤履", Qian, Dui),
    hex(11, "地天泰", Kun, Qian),
    hex(12, "天地否", Qian, Kun),
    hex(13, "天火同人", Qian, Li),
    hex(14, "火天大有", Li, Qian),
    hex(15, "地山謙", Kun, Gen),
    hex(16, "雷地豫", Zhen, Kun),
    hex(17, "澤雷隨", Dui, Zhen),
    hex(18, "山風蠱", Gen, Xun),
    hex(19, "地澤臨", Kun, Dui),
    hex(20, "風地觀", Xun, Kun),
    hex(21, "火雷噬嗑", Li, Zhen),
    hex(22, "山火賁", Gen, Li),
    hex(23, "山地剝", Gen, Kun),
    hex(24, "地雷復", Kun, Zhen),
    hex(25, "天雷無妄", Qian, Zhen),
    hex(26, "山天大畜", Gen, Qian),
    hex(27, "山雷頤", Gen, Zhen),
    hex(28, "澤風大過", Dui, Xun),
    hex(29, "坎為水", Kan, Kan),
    hex(30, "離為火", Li, Li),
    hex(31, "澤山咸", Dui, Gen),
    hex(32, "雷風恆", Zhen, Xun),
    hex(33, "天山遁", Qian, Gen),
    hex(34, "雷天大壯", Zhen, Qian),
    hex(35, "火地晉", Li, Kun),
    hex(36, "地火明夷", Kun, Li),
    hex(37, "風火家人", Xun, Li),
    hex(38, "火澤睽", Li, Dui),
    hex(39, "水山蹇", Kan, Gen),
    hex(40, "雷水解", Zhen, Kan),
    hex(41, "山澤損", Gen, Dui),
    hex(42, "風雷益", Xun, Zhen),
    hex(43, "澤天夬", Dui, Qian),
    hex(44, "天風姤", Qian, Xun),
    hex(45, "澤地萃", Dui, Kun),
    hex(46, "地風升", Kun, Xun),
    hex(47, "澤水困", Dui, Kan),
    hex(48, "水風井", Kan, Xun),
    hex(49, "澤火革", Dui, Li),
    hex(50, "火風鼎", Li, Xun),
    hex(51, "震為雷", Zhen, Zhen),
    hex(52, "艮為山", Gen, Gen),
    hex(53, "風山漸", Xun, Gen),
    hex(54, "雷澤歸妹", Zhen, Dui),
    hex(55, "雷火豐", Zhen, Li),
    hex(56, "火山旅", Li, Gen),
    hex(57, "巽為風", Xun, Xun),
    hex(58, "兌為澤", Dui, Dui),
    hex(59, "風水渙", Xun, Kan),
    hex(60, "水澤節", Kan, Dui),
    hex(61, "風澤中孚", Xun, Dui),
    hex(62, "雷山小過", Zhen, Gen),
    hex(63, "水火既濟", Kan, Li),
    hex(64, "火水未濟", Li, Kan),
];

/// Traditional names of line positions 1-6, bottom first.
pub const LINE_POSITION_NAMES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

/// Name of a 1-based line position; "" outside 1-6.
pub fn line_position_name(position: u8) -> &'static str {
    match position {
        1..=6 => LINE_POSITION_NAMES[(position - 1) as usize],
        _ => "",
    }
}

/// Find a hexagram by its full name.
pub fn hexagram_by_name(name: &str) -> Option<&'static Hexagram> {
    HEXAGRAMS.iter().find(|h| h.name == name)
}

/// Find the hexagram with the given six lines (bottom first).
pub fn hexagram_by_lines(lines: &[Yao; 6]) -> Option<&'static Hexagram> {
    HEXAGRAMS.iter().find(|h| h.lines() == *lines)
}

/// Find the hexagram composed of the given trigrams.
pub fn hexagram_by_trigrams(upper: Trigram, lower: Trigram) -> Option<&'static Hexagram> {
    HEXAGRAMS
        .iter()
        .find(|h| h.upper == upper && h.lower == lower)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, h) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(h.number as usize, i + 1, "{}", h.name);
        }
    }

    #[test]
    fn structures_unique() {
        let set: HashSet<[Yao; 6]> = HEXAGRAMS.iter().map(Hexagram::lines).collect();
        assert_eq!(set.len(), 64);
    }

    #[test]
    fn names_unique() {
        let set: HashSet<&str> = HEXAGRAMS.iter().map(|h| h.name).collect();
        assert_eq!(set.len(), 64);
    }

    #[test]
    fn names_agree_with_trigram_images() {
        for h in &HEXAGRAMS {
            if h.is_pure() {
                let expected = format!("{}為{}", h.upper.name(), h.upper.image());
                assert_eq!(h.name, expected);
            } else {
                let prefix = format!("{}{}", h.upper.image(), h.lower.image());
                assert!(h.name.starts_with(&prefix), "{} vs {prefix}", h.name);
            }
        }
    }

    #[test]
    fn qian_is_all_yang() {
        assert_eq!(HEXAGRAMS[0].lines(), [Yao::Yang; 6]);
        assert_eq!(HEXAGRAMS[1].lines(), [Yao::Yin; 6]);
    }

    #[test]
    fn lookup_by_lines_and_trigrams() {
        let guai = hexagram_by_lines(&[
            Yao::Yang,
            Yao::Yang,
            Yao::Yang,
            Yao::Yang,
            Yao::Yang,
            Yao::Yin,
        ])
        .unwrap();
        assert_eq!(guai.name, "澤天夬");
        assert_eq!(hexagram_by_trigrams(Trigram::Kan, Trigram::Dui).unwrap().name, "水澤節");
        assert_eq!(hexagram_by_trigrams(Trigram::Xun, Trigram::Kan).unwrap().name, "風水渙");
    }

    #[test]
    fn lookup_by_name_rejects_unknown() {
        assert!(hexagram_by_name("乾為天").is_some());
        assert!(hexagram_by_name("未知卦").is_none());
    }
}

//! The eight palaces (八宮) of the Jing Fang system.
//!
//! Each palace is headed by a doubled trigram and holds 8 hexagrams. The
//! list order is the generation sequence: the root, then lines 1..5 changed
//! cumulatively, then the wandering-soul (line 4 restored) and the
//! returning-soul (lower trigram restored).

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::trigram::Trigram;

/// Position of a hexagram within its palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    #[serde(rename = "本宮卦")]
    Root,
    #[serde(rename = "一世卦")]
    First,
    #[serde(rename = "二世卦")]
    Second,
    #[serde(rename = "三世卦")]
    Third,
    #[serde(rename = "四世卦")]
    Fourth,
    #[serde(rename = "五世卦")]
    Fifth,
    #[serde(rename = "游魂卦")]
    Wandering,
    #[serde(rename = "歸魂卦")]
    Returning,
}

/// All 8 generations in palace order.
pub const ALL_GENERATIONS: [Generation; 8] = [
    Generation::Root,
    Generation::First,
    Generation::Second,
    Generation::Third,
    Generation::Fourth,
    Generation::Fifth,
    Generation::Wandering,
    Generation::Returning,
];

impl Generation {
    /// Traditional label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "本宮卦",
            Self::First => "一世卦",
            Self::Second => "二世卦",
            Self::Third => "三世卦",
            Self::Fourth => "四世卦",
            Self::Fifth => "五世卦",
            Self::Wandering => "游魂卦",
            Self::Returning => "歸魂卦",
        }
    }

    /// English label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::First => "1st generation",
            Self::Second => "2nd generation",
            Self::Third => "3rd generation",
            Self::Fourth => "4th generation",
            Self::Fifth => "5th generation",
            Self::Wandering => "wandering soul",
            Self::Returning => "returning soul",
        }
    }

    /// 0-based index in the palace list.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Generation at a palace-list index. Returns None if index >= 8.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_GENERATIONS.get(index).copied()
    }

    /// Position (1-6) of the self line (世爻).
    pub const fn self_line(self) -> u8 {
        match self {
            Self::Root => 6,
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Wandering => 4,
            Self::Returning => 3,
        }
    }

    /// Position (1-6) of the counterpart line (應爻), three away from self.
    pub const fn counterpart_line(self) -> u8 {
        let s = self.self_line();
        if s <= 3 { s + 3 } else { s - 3 }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One palace: its heading trigram and 8 member names in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palace {
    pub trigram: Trigram,
    pub members: [&'static str; 8],
}

impl Palace {
    /// Element shared by every hexagram of the palace.
    pub const fn element(&self) -> Element {
        self.trigram.element()
    }

    /// Name of the root hexagram (generation 0).
    pub const fn root(&self) -> &'static str {
        self.members[0]
    }

    /// Generation of a member hexagram, or None if it is not in this palace.
    pub fn generation_of(&self, name: &str) -> Option<Generation> {
        self.members
            .iter()
            .position(|m| *m == name)
            .and_then(Generation::from_index)
    }
}

/// All 8 palaces.
pub static PALACES: [Palace; 8] = [
    Palace {
        trigram: Trigram::Qian,
        members: [
            "乾為天", "天風姤", "天山遁", "天地否", "風地觀", "山地剝", "火地晉", "火天大有",
        ],
    },
    Palace {
        trigram: Trigram::Kan,
        members: [
            "坎為水", "水澤節", "水雷屯", "水火既濟", "澤火革", "雷火豐", "地火明夷", "地水師",
        ],
    },
    Palace {
        trigram: Trigram::Gen,
        members: [
            "艮為山", "山火賁", "山天大畜", "山澤損", "火澤睽", "天澤履", "風澤中孚", "風山漸",
        ],
    },
    Palace {
        trigram: Trigram::Zhen,
        members: [
            "震為雷", "雷地豫", "雷水解", "雷風恆", "地風升", "水風井", "澤風大過", "澤雷隨",
        ],
    },
    Palace {
        trigram: Trigram::Xun,
        members: [
            "巽為風", "風天小畜", "風火家人", "風雷益", "天雷無妄", "火雷噬嗑", "山雷頤", "山風蠱",
        ],
    },
    Palace {
        trigram: Trigram::Li,
        members: [
            "離為火", "火山旅", "火風鼎", "火水未濟", "山水蒙", "風水渙", "天水訟", "天火同人",
        ],
    },
    Palace {
        trigram: Trigram::Dui,
        members: [
            "兌為澤", "澤水困", "澤地萃", "澤山咸", "水山蹇", "地山謙", "雷山小過", "雷澤歸妹",
        ],
    },
    Palace {
        trigram: Trigram::Kun,
        members: [
            "坤為地", "地雷復", "地澤臨", "地天泰", "雷天大壯", "澤天夬", "水天需", "水地比",
        ],
    },
];

/// Owning palace and generation of a hexagram name (linear scan).
pub fn palace_of(name: &str) -> Option<(&'static Palace, Generation)> {
    PALACES
        .iter()
        .find_map(|p| p.generation_of(name).map(|g| (p, g)))
}

/// The palace headed by a trigram.
pub fn palace_for_trigram(trigram: Trigram) -> &'static Palace {
    let index = match trigram {
        Trigram::Qian => 0,
        Trigram::Kan => 1,
        Trigram::Gen => 2,
        Trigram::Zhen => 3,
        Trigram::Xun => 4,
        Trigram::Li => 5,
        Trigram::Dui => 6,
        Trigram::Kun => 7,
    };
    &PALACES[index]
}

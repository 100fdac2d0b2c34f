//! The six guardian spirits (六神).
//!
//! The spirits are laid on the lines bottom to top in a fixed cycle; the day
//! stem picks which spirit sits on line 1.

use serde::{Deserialize, Serialize};

use crate::ganzhi::Stem;

/// One of the six spirits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spirit {
    #[serde(rename = "青龍")]
    AzureDragon,
    #[serde(rename = "朱雀")]
    VermilionBird,
    #[serde(rename = "勾陳")]
    HookedArray,
    #[serde(rename = "螣蛇")]
    FlyingSerpent,
    #[serde(rename = "白虎")]
    WhiteTiger,
    #[serde(rename = "玄武")]
    BlackTortoise,
}

/// The spirit cycle in laying order.
pub const SPIRIT_CYCLE: [Spirit; 6] = [
    Spirit::AzureDragon,
    Spirit::VermilionBird,
    Spirit::HookedArray,
    Spirit::FlyingSerpent,
    Spirit::WhiteTiger,
    Spirit::BlackTortoise,
];

impl Spirit {
    /// Traditional label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龍",
            Self::VermilionBird => "朱雀",
            Self::HookedArray => "勾陳",
            Self::FlyingSerpent => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }
}

impl std::fmt::Display for Spirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Index into [`SPIRIT_CYCLE`] of the spirit on line 1 for a day stem.
///
/// 甲乙 青龍, 丙丁 朱雀, 戊 勾陳, 己 螣蛇, 庚辛 白虎, 壬癸 玄武.
pub const fn spirit_start_index(day_stem: Stem) -> u8 {
    match day_stem {
        Stem::Jia | Stem::Yi => 0,
        Stem::Bing | Stem::Ding => 1,
        Stem::Wu => 2,
        Stem::Ji => 3,
        Stem::Geng | Stem::Xin => 4,
        Stem::Ren | Stem::Gui => 5,
    }
}

/// Spirit on a 1-based line position for a day stem.
pub const fn spirit_for_line(day_stem: Stem, position: u8) -> Spirit {
    let offset = (position + 5) % 6;
    SPIRIT_CYCLE[((spirit_start_index(day_stem) + offset) % 6) as usize]
}

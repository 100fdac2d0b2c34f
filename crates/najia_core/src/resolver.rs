//! Hexagram identity: six-line structures, moving lines, and name lookups.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use najia_tables::{
    Hexagram, Trigram, Yao, hexagram_by_lines, hexagram_by_name, hexagram_by_trigrams,
};

use crate::error::NajiaError;

/// Name reported for a structure or name with no table entry.
pub const UNKNOWN_HEXAGRAM: &str = "未知卦";

/// Six yin/yang values, bottom line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineStructure([Yao; 6]);

impl LineStructure {
    pub const fn new(lines: [Yao; 6]) -> Self {
        Self(lines)
    }

    /// Lines bottom first.
    pub const fn lines(&self) -> [Yao; 6] {
        self.0
    }

    /// Line at a 1-based position.
    pub fn line(&self, position: u8) -> Option<Yao> {
        position
            .checked_sub(1)
            .and_then(|i| self.0.get(i as usize).copied())
    }

    /// 0/1 values bottom first.
    pub fn bits(&self) -> [u8; 6] {
        self.0.map(Yao::bit)
    }

    /// Copy with every moving position flipped.
    pub fn flipped(&self, moving: &MovingLines) -> Self {
        let mut lines = self.0;
        for position in moving.iter() {
            let i = (position - 1) as usize;
            lines[i] = lines[i].flipped();
        }
        Self(lines)
    }

    /// Trigram on three consecutive 1-based positions starting at `from`.
    fn trigram_at(&self, from: usize) -> Trigram {
        let i = from - 1;
        Trigram::from_lines([self.0[i], self.0[i + 1], self.0[i + 2]])
    }
}

impl From<&Hexagram> for LineStructure {
    fn from(hexagram: &Hexagram) -> Self {
        Self(hexagram.lines())
    }
}

impl TryFrom<&[u8]> for LineStructure {
    type Error = NajiaError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.len() != 6 {
            return Err(NajiaError::InputFormat(format!(
                "expected 6 line values, got {}",
                values.len()
            )));
        }
        let mut lines = [Yao::Yin; 6];
        for (slot, &v) in lines.iter_mut().zip(values) {
            *slot = Yao::from_bit(v).ok_or_else(|| {
                NajiaError::InputFormat(format!("line value {v} is not 0 or 1"))
            })?;
        }
        Ok(Self(lines))
    }
}

impl FromStr for LineStructure {
    type Err = NajiaError;

    /// Parses "1,1,1,1,1,0" (bottom first); whitespace around values is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u8>()
                    .map_err(|_| NajiaError::InputFormat(format!("bad line value '{part}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(values.as_slice())
    }
}

impl Display for LineStructure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bits = self.bits().map(|b| b.to_string());
        f.write_str(&bits.join(","))
    }
}

/// A set of moving line positions (1-6). Order and duplicates carry no meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MovingLines(u8);

impl MovingLines {
    pub const fn none() -> Self {
        Self(0)
    }

    /// Build from 1-based positions, rejecting anything outside 1-6.
    pub fn from_positions<I>(positions: I) -> Result<Self, NajiaError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut mask = 0u8;
        for p in positions {
            if !(1..=6).contains(&p) {
                return Err(NajiaError::InputFormat(format!("moving line {p} outside 1-6")));
            }
            mask |= 1 << (p - 1);
        }
        Ok(Self(mask))
    }

    pub const fn contains(&self, position: u8) -> bool {
        position >= 1 && position <= 6 && self.0 & (1 << (position - 1)) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=6).filter(move |&p| self.contains(p))
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl FromStr for MovingLines {
    type Err = NajiaError;

    /// Parses "1,6"; an empty string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let positions = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| NajiaError::InputFormat(format!("bad moving line '{part}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_positions(positions)
    }
}

/// Outcome of a structure or name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexagramLookup {
    Known(&'static Hexagram),
    Unknown,
}

impl HexagramLookup {
    /// Table name, or the unknown sentinel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Known(h) => h.name,
            Self::Unknown => UNKNOWN_HEXAGRAM,
        }
    }

    pub fn hexagram(&self) -> Option<&'static Hexagram> {
        match self {
            Self::Known(h) => Some(h),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<&'static Hexagram>> for HexagramLookup {
    fn from(found: Option<&'static Hexagram>) -> Self {
        found.map_or(Self::Unknown, Self::Known)
    }
}

/// Hexagram with the given structure.
pub fn hexagram_from_lines(lines: LineStructure) -> HexagramLookup {
    let found = HexagramLookup::from(hexagram_by_lines(&lines.lines()));
    if !found.is_known() {
        tracing::warn!(%lines, "structure has no hexagram");
    }
    found
}

/// Structure of a named hexagram.
pub fn structure_of(name: &str) -> Option<LineStructure> {
    hexagram_by_name(name).map(LineStructure::from)
}

/// Name of the hexagram reached by flipping the moving lines of `name`.
pub fn changed_hexagram_name(name: &str, moving: &MovingLines) -> HexagramLookup {
    let Some(primary) = structure_of(name) else {
        tracing::warn!(name, "cannot change unknown hexagram");
        return HexagramLookup::Unknown;
    };
    let changed = primary.flipped(moving);
    tracing::debug!(name, from = %primary, to = %changed, "changed structure");
    hexagram_from_lines(changed)
}

/// Interlocking hexagram (互卦): lines 2-4 below, lines 3-5 above.
pub fn interlocking_hexagram(lines: LineStructure) -> HexagramLookup {
    let lower = lines.trigram_at(2);
    let upper = lines.trigram_at(3);
    hexagram_by_trigrams(upper, lower).into()
}

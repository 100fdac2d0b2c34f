//! Month branches (月建) bounded by the twelve "sectional" solar terms.
//!
//! A divination month starts on the day of its sectional term (立春, 驚蟄,
//! ...), not on the 1st of the civil month. The start days are the usual
//! Gregorian dates of each term; the true instant drifts by about a day from
//! year to year.

use crate::ganzhi::Branch;

/// Start of a month-branch period within a civil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTerm {
    /// Traditional name of the sectional term.
    pub name: &'static str,
    /// Civil month (1-12) in which the term falls.
    pub month: u32,
    /// Day of that month on which the new branch begins.
    pub start_day: u32,
    /// Month branch from the start day onward.
    pub branch: Branch,
}

/// Sectional terms for January..December.
#[rustfmt::skip]
pub const SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm { name: "小寒", month: 1, start_day: 5, branch: Branch::Chou },
    SolarTerm { name: "立春", month: 2, start_day: 4, branch: Branch::Yin },
    SolarTerm { name: "驚蟄", month: 3, start_day: 5, branch: Branch::Mao },
    SolarTerm { name: "清明", month: 4, start_day: 4, branch: Branch::Chen },
    SolarTerm { name: "立夏", month: 5, start_day: 5, branch: Branch::Si },
    SolarTerm { name: "芒種", month: 6, start_day: 5, branch: Branch::Wu },
    SolarTerm { name: "小暑", month: 7, start_day: 6, branch: Branch::Wei },
    SolarTerm { name: "立秋", month: 8, start_day: 7, branch: Branch::Shen },
    SolarTerm { name: "白露", month: 9, start_day: 7, branch: Branch::You },
    SolarTerm { name: "寒露", month: 10, start_day: 8, branch: Branch::Xu },
    SolarTerm { name: "立冬", month: 11, start_day: 7, branch: Branch::Hai },
    SolarTerm { name: "大雪", month: 12, start_day: 6, branch: Branch::Zi },
];

/// Term for a civil month (1-12). Returns None for any other month.
pub fn solar_term_for_month(month: u32) -> Option<&'static SolarTerm> {
    SOLAR_TERMS.get(month.checked_sub(1)? as usize)
}

/// Month branch for a civil month and day.
///
/// Before the month's term day the previous month's branch still rules;
/// January wraps to December. Returns None for a month outside 1-12.
pub fn month_branch(month: u32, day: u32) -> Option<Branch> {
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(month_branch_from_month0(month - 1, day))
}

/// Month branch for a 0-based civil month (taken modulo 12) and day.
pub fn month_branch_from_month0(month0: u32, day: u32) -> Branch {
    let term = &SOLAR_TERMS[(month0 % 12) as usize];
    if day >= term.start_day {
        term.branch
    } else {
        SOLAR_TERMS[((month0 + 11) % 12) as usize].branch
    }
}

//! Void branches (旬空).
//!
//! A ten-day week (旬) pairs ten stems with ten of the twelve branches; the
//! two branches left over are void for every day of that week.

use najia_tables::{Branch, Stem, is_sexagenary_pair};

use crate::error::TimeError;

/// Week-start branch → its two void branches.
pub const VOID_TABLE: [(Branch, [Branch; 2]); 6] = [
    (Branch::Zi, [Branch::Xu, Branch::Hai]),
    (Branch::Xu, [Branch::Shen, Branch::You]),
    (Branch::Shen, [Branch::Wu, Branch::Wei]),
    (Branch::Wu, [Branch::Chen, Branch::Si]),
    (Branch::Chen, [Branch::Yin, Branch::Mao]),
    (Branch::Yin, [Branch::Zi, Branch::Chou]),
];

/// Branch on which the week containing `stem`/`branch` began (the 甲 day).
pub fn week_start(stem: Stem, branch: Branch) -> Result<Branch, TimeError> {
    if !is_sexagenary_pair(stem, branch) {
        return Err(TimeError::NotSexagenary { stem, branch });
    }
    Ok(Branch::from_index((branch.index() + 12 - stem.index()) % 12))
}

/// The two void branches for a day pillar.
pub fn resolve_void(stem: Stem, branch: Branch) -> Result<[Branch; 2], TimeError> {
    let start = week_start(stem, branch)?;
    VOID_TABLE
        .iter()
        .find(|(s, _)| *s == start)
        .map(|(_, voids)| *voids)
        .ok_or(TimeError::NotSexagenary { stem, branch })
}

#[cfg(test)]
mod tests {
    use super::*;
    use najia_tables::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn wu_wu_day() {
        assert_eq!(week_start(Stem::Wu, Branch::Wu).unwrap(), Branch::Yin);
        assert_eq!(
            resolve_void(Stem::Wu, Branch::Wu).unwrap(),
            [Branch::Zi, Branch::Chou]
        );
    }

    #[test]
    fn jia_zi_week() {
        assert_eq!(
            resolve_void(Stem::Gui, Branch::You).unwrap(),
            [Branch::Xu, Branch::Hai]
        );
    }

    #[test]
    fn voids_follow_week_end() {
        // The void pair is the two branches after the week's 癸 day.
        for stem in ALL_STEMS {
            for branch in ALL_BRANCHES {
                let Ok(voids) = resolve_void(stem, branch) else {
                    continue;
                };
                let gui_branch = Branch::from_index(branch.index() + 9 - stem.index());
                assert_eq!(voids[0], Branch::from_index(gui_branch.index() + 1));
                assert_eq!(voids[1], Branch::from_index(gui_branch.index() + 2));
            }
        }
    }

    #[test]
    fn every_valid_pair_has_two_distinct_voids() {
        let mut count = 0;
        for stem in ALL_STEMS {
            for branch in ALL_BRANCHES {
                if let Ok([a, b]) = resolve_void(stem, branch) {
                    assert_ne!(a, b);
                    count += 1;
                }
            }
        }
        assert_eq!(count, 60);
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert_eq!(
            resolve_void(Stem::Jia, Branch::Chou),
            Err(TimeError::NotSexagenary {
                stem: Stem::Jia,
                branch: Branch::Chou
            })
        );
    }
}

//! Six clashes (六沖) and six combinations (六合) between branches.

use crate::ganzhi::Branch;

/// The six clashing pairs; each branch clashes with the one opposite it.
pub const SIX_CLASHES: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Wu),
    (Branch::Chou, Branch::Wei),
    (Branch::Yin, Branch::Shen),
    (Branch::Mao, Branch::You),
    (Branch::Chen, Branch::Xu),
    (Branch::Si, Branch::Hai),
];

/// The six combining pairs.
pub const SIX_COMBINATIONS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Chou),
    (Branch::Yin, Branch::Hai),
    (Branch::Mao, Branch::Xu),
    (Branch::Chen, Branch::You),
    (Branch::Si, Branch::Shen),
    (Branch::Wu, Branch::Wei),
];

fn partner(table: &[(Branch, Branch); 6], branch: Branch) -> Branch {
    // Every branch appears exactly once in each table.
    table
        .iter()
        .find_map(|&(a, b)| {
            if a == branch {
                Some(b)
            } else if b == branch {
                Some(a)
            } else {
                None
            }
        })
        .unwrap_or(branch)
}

/// The branch that clashes with `branch`.
pub fn clash_partner(branch: Branch) -> Branch {
    partner(&SIX_CLASHES, branch)
}

/// The branch that combines with `branch`.
pub fn combine_partner(branch: Branch) -> Branch {
    partner(&SIX_COMBINATIONS, branch)
}

/// Whether two branches clash (order-independent).
pub fn clashes(a: Branch, b: Branch) -> bool {
    clash_partner(a) == b
}

/// Whether two branches combine (order-independent).
pub fn combines(a: Branch, b: Branch) -> bool {
    combine_partner(a) == b
}

//! Subtree aggregation over the inviter graph
//!
//! The inviter relation is a parent pointer with no enforced acyclicity, so
//! every traversal here carries a visited set: a member encountered twice is
//! skipped rather than re-expanded. On well-formed data the guard never
//! fires; on malformed data it keeps the walk finite and counts each member
//! at most once.

use crate::member::{Member, MemberDirectory};
use log::warn;
use serde::Serialize;
use std::collections::HashSet;

/// Size and capital of a member's downstream organization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubtreeStatistics {
    /// Members invited directly by the root
    pub direct_count: usize,

    /// The root plus every reachable descendant
    pub total_count: usize,

    /// Invested amount summed over the root and every reachable descendant
    pub total_invested: f64,
}

/// Compute team statistics for the subtree rooted at `root`
///
/// Breadth-first, level by level: fetch the next level's invitees for every
/// member of the current level until a level comes back empty.
pub fn subtree_statistics<D: MemberDirectory + ?Sized>(
    directory: &D,
    root: &Member,
) -> SubtreeStatistics {
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root.referral_code.clone());

    let mut total_count = 1usize;
    let mut total_invested = root.invested_amount;

    let mut level = expand_level(directory, &[root], &mut visited);
    let direct_count = level.len();

    while !level.is_empty() {
        total_count += level.len();
        total_invested += level.iter().map(|m| m.invested_amount).sum::<f64>();
        level = expand_level(directory, &level, &mut visited);
    }

    SubtreeStatistics {
        direct_count,
        total_count,
        total_invested,
    }
}

/// Resolve the member who invited `member`, if any
///
/// A missing inviter code, or a code matching no record, simply means no
/// superior exists; neither case is an error.
pub fn superior<'a, D: MemberDirectory + ?Sized>(
    directory: &'a D,
    member: &Member,
) -> Option<&'a Member> {
    let code = member.inviter_code.as_deref()?;
    directory.find(code)
}

/// Level-order adjacency for rendering the tree view
///
/// Element 0 holds the root's direct invitees, element 1 their invitees, and
/// so on. The root itself is not included. Cycle-guarded like
/// [`subtree_statistics`].
pub fn levels<'a, D: MemberDirectory + ?Sized>(
    directory: &'a D,
    root: &Member,
) -> Vec<Vec<&'a Member>> {
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root.referral_code.clone());

    let mut out = Vec::new();
    let mut level = expand_level(directory, &[root], &mut visited);
    while !level.is_empty() {
        let next = expand_level(directory, &level, &mut visited);
        out.push(level);
        level = next;
    }
    out
}

/// Invitees of every member in `current`, skipping anything already visited
fn expand_level<'a, D: MemberDirectory + ?Sized>(
    directory: &'a D,
    current: &[&Member],
    visited: &mut HashSet<String>,
) -> Vec<&'a Member> {
    let mut next = Vec::new();
    for member in current {
        for invitee in directory.direct_invitees(&member.referral_code) {
            if visited.insert(invitee.referral_code.clone()) {
                next.push(invitee);
            } else {
                warn!(
                    "inviter cycle: member {} reached again under {}, truncating branch",
                    invitee.referral_code, member.referral_code
                );
            }
        }
    }
    next
}

//! Read-only member directory provider

use super::Member;
use std::collections::HashMap;

/// Read access the traversal and rendering code depends on
///
/// The surrounding application owns writes; these two queries are the whole
/// contract at this boundary.
pub trait MemberDirectory {
    /// Look up a member by referral code
    fn find(&self, referral_code: &str) -> Option<&Member>;

    /// All members whose inviter code equals the given referral code
    ///
    /// Iteration order is stable across calls but otherwise unspecified.
    fn direct_invitees(&self, referral_code: &str) -> Vec<&Member>;
}

/// In-memory directory backed by the loaded roster
///
/// Members keep roster order, so invitee listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    members: Vec<Member>,
    by_code: HashMap<String, usize>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member; returns false (and keeps the existing record) on a
    /// duplicate referral code.
    pub fn insert(&mut self, member: Member) -> bool {
        if self.by_code.contains_key(&member.referral_code) {
            return false;
        }
        self.by_code
            .insert(member.referral_code.clone(), self.members.len());
        self.members.push(member);
        true
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Members with no resolvable inviter (forest roots), roster order
    pub fn roots(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| match &m.inviter_code {
                Some(code) => !self.by_code.contains_key(code),
                None => true,
            })
            .collect()
    }
}

impl MemberDirectory for InMemoryDirectory {
    fn find(&self, referral_code: &str) -> Option<&Member> {
        self.by_code.get(referral_code).map(|&i| &self.members[i])
    }

    fn direct_invitees(&self, referral_code: &str) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| m.inviter_code.as_deref() == Some(referral_code))
            .collect()
    }
}

impl FromIterator<Member> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        let mut dir = Self::new();
        for member in iter {
            dir.insert(member);
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Gender;
    use chrono::NaiveDate;

    fn member(code: &str, inviter: Option<&str>) -> Member {
        Member {
            referral_code: code.to_string(),
            first_name: code.to_string(),
            last_name: "Test".to_string(),
            email: format!("{}@example.com", code.to_lowercase()),
            username: code.to_lowercase(),
            invested_amount: 0.0,
            active: true,
            join_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            birth_date: None,
            phone: None,
            gender: Some(Gender::Male),
            inviter_code: inviter.map(str::to_string),
        }
    }

    #[test]
    fn test_find_and_invitees() {
        let dir: InMemoryDirectory = vec![
            member("R", None),
            member("A", Some("R")),
            member("B", Some("R")),
            member("C", Some("B")),
        ]
        .into_iter()
        .collect();

        assert!(dir.find("R").is_some());
        assert!(dir.find("X").is_none());

        let invitees = dir.direct_invitees("R");
        let codes: Vec<&str> = invitees.iter().map(|m| m.referral_code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut dir = InMemoryDirectory::new();
        let mut first = member("R", None);
        first.email = "first@example.com".to_string();
        assert!(dir.insert(first));

        let mut dup = member("R", None);
        dup.email = "second@example.com".to_string();
        assert!(!dir.insert(dup));

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.find("R").unwrap().email, "first@example.com");
    }

    #[test]
    fn test_roots_include_dangling_inviter() {
        let dir: InMemoryDirectory = vec![
            member("R", None),
            member("A", Some("R")),
            // Inviter code never registered: treated as a forest root
            member("Z", Some("GONE")),
        ]
        .into_iter()
        .collect();

        let roots: Vec<&str> = dir.roots().iter().map(|m| m.referral_code.as_str()).collect();
        assert_eq!(roots, vec!["R", "Z"]);
    }
}

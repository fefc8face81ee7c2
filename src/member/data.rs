//! Core member record

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Member gender as stored on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label used in rendered support messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// A single member of the referral program
///
/// The referral code is the member's unique identity. The inviter code is a
/// parent pointer into the same directory; a member whose inviter code is
/// empty or does not match any record is a forest root. Nothing enforces
/// acyclicity of the inviter graph, so traversal code must guard against
/// cycles itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique referral code (uppercase, free-form)
    pub referral_code: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,

    /// Total invested amount in account currency (2-decimal semantics)
    pub invested_amount: f64,

    /// Inactive members are retained but excluded from support messaging
    pub active: bool,

    pub join_date: NaiveDate,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,

    /// Referral code of the member who invited this one, if any
    pub inviter_code: Option<String>,
}

impl Member {
    /// Combined display name ("First Last")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Completed years of age as of the given date, if a birth date is on file
    pub fn age(&self, as_of: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        if as_of < birth {
            return Some(0);
        }
        let mut years = as_of.year() - birth.year();
        if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        Some(years.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Member {
        Member {
            referral_code: "RIS001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lima".to_string(),
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            invested_amount: 1000.0,
            active: true,
            join_date: date(2023, 5, 1),
            birth_date: Some(date(1990, 6, 15)),
            phone: None,
            gender: Some(Gender::Female),
            inviter_code: None,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sample().display_name(), "Ana Lima");
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let m = sample();
        // Day before the 2024 birthday
        assert_eq!(m.age(date(2024, 6, 14)), Some(33));
        // On the birthday
        assert_eq!(m.age(date(2024, 6, 15)), Some(34));
    }

    #[test]
    fn test_age_without_birth_date() {
        let mut m = sample();
        m.birth_date = None;
        assert_eq!(m.age(date(2024, 1, 1)), None);
    }
}

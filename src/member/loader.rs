//! Member roster loading from CSV
//!
//! The roster is the export the main application produces: one row per
//! member, inviter code blank for forest roots. Loading is lenient on
//! optional fields and strict on identity (duplicate referral codes are an
//! error, not a silent overwrite).

use super::{Gender, InMemoryDirectory, Member, MemberDirectory};
use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate referral code {0}")]
    DuplicateCode(String),

    #[error("invalid {field} value {value:?} for member {code}")]
    InvalidField {
        code: String,
        field: &'static str,
        value: String,
    },
}

/// Raw CSV row before field validation
#[derive(Debug, Deserialize)]
struct RosterRow {
    referral_code: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    invested_amount: Option<f64>,
    #[serde(default)]
    active: Option<String>,
    join_date: String,
    #[serde(default)]
    birth_date: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    inviter_code: Option<String>,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(
    code: &str,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, DirectoryError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DirectoryError::InvalidField {
        code: code.to_string(),
        field,
        value: value.to_string(),
    })
}

impl RosterRow {
    fn into_member(self) -> Result<Member, DirectoryError> {
        let code = self.referral_code.trim().to_uppercase();

        let join_date = parse_date(&code, "join_date", self.join_date.trim())?;
        let birth_date = match self.birth_date.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(v) => Some(parse_date(&code, "birth_date", v)?),
        };

        // Exports write 0/1; accept common boolean spellings, default active
        let active = match self.active.as_deref().map(str::trim) {
            Some("") | None => true,
            Some(v) => matches!(v, "1" | "true" | "TRUE" | "yes" | "YES"),
        };

        let gender = match self.gender.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("male") => Some(Gender::Male),
            Some(v) if v.eq_ignore_ascii_case("female") => Some(Gender::Female),
            _ => None,
        };

        let inviter_code = self
            .inviter_code
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_uppercase);

        let phone = self
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Ok(Member {
            referral_code: code,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            invested_amount: self.invested_amount.unwrap_or(0.0).max(0.0),
            active,
            join_date,
            birth_date,
            phone,
            gender,
            inviter_code,
        })
    }
}

/// Load the member roster from a CSV file
pub fn load_members<P: AsRef<Path>>(path: P) -> Result<InMemoryDirectory, DirectoryError> {
    let file = File::open(path)?;
    load_members_from_reader(file)
}

/// Load the member roster from any reader (first row is the header)
pub fn load_members_from_reader<R: Read>(reader: R) -> Result<InMemoryDirectory, DirectoryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut directory = InMemoryDirectory::new();
    for row in csv_reader.deserialize::<RosterRow>() {
        let member = row?.into_member()?;
        let code = member.referral_code.clone();
        if !directory.insert(member) {
            return Err(DirectoryError::DuplicateCode(code));
        }
    }

    // Dangling inviter codes are tolerated (the member becomes a forest
    // root) but worth surfacing for the operator.
    for member in directory.iter() {
        if let Some(inviter) = &member.inviter_code {
            if directory.find(inviter).is_none() {
                warn!(
                    "member {} references unknown inviter code {}",
                    member.referral_code, inviter
                );
            }
        }
    }

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "\
referral_code,first_name,last_name,email,username,invested_amount,active,join_date,birth_date,phone,gender,inviter_code
RIS001,Ana,Lima,ana@example.com,ana,1000.50,1,2023-05-01,1990-06-15,,Female,
RIS002,Ben,Okafor,ben@example.com,ben,250,1,2023-06-10,,,Male,RIS001
RIS003,Cara,Silva,cara@example.com,cara,,0,2023-07-01,1985-01-20,555-0100,,ris001
";

    #[test]
    fn test_load_roster() {
        let dir = load_members_from_reader(ROSTER.as_bytes()).unwrap();
        assert_eq!(dir.len(), 3);

        let ana = dir.find("RIS001").unwrap();
        assert_eq!(ana.display_name(), "Ana Lima");
        assert!((ana.invested_amount - 1000.50).abs() < 1e-9);
        assert!(ana.active);
        assert!(ana.inviter_code.is_none());

        // Lowercase inviter codes are normalized on load
        let cara = dir.find("RIS003").unwrap();
        assert_eq!(cara.inviter_code.as_deref(), Some("RIS001"));
        assert!(!cara.active);
        assert_eq!(cara.invested_amount, 0.0);
        assert_eq!(cara.gender, None);
        assert_eq!(cara.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let roster = "\
referral_code,first_name,last_name,email,username,invested_amount,active,join_date,birth_date,phone,gender,inviter_code
RIS001,Ana,Lima,ana@example.com,ana,100,1,2023-05-01,,,,
ris001,Ana,Again,dup@example.com,dup,100,1,2023-05-02,,,,
";
        let err = load_members_from_reader(roster.as_bytes()).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateCode(code) if code == "RIS001"));
    }

    #[test]
    fn test_invalid_join_date() {
        let roster = "\
referral_code,first_name,last_name,email,username,invested_amount,active,join_date,birth_date,phone,gender,inviter_code
RIS001,Ana,Lima,ana@example.com,ana,100,1,05/01/2023,,,,
";
        let err = load_members_from_reader(roster.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::InvalidField { field: "join_date", .. }
        ));
    }
}

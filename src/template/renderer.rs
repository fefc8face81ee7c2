//! Variable substitution for reply templates
//!
//! Tokens have the exact form `{identifier}` with identifier characters
//! limited to letters, digits, underscore, and dot. Resolution per token,
//! first match wins: override map, then the enumerated member accessor
//! table, then the per-variable default. An identifier outside the
//! catalogue renders literally so the operator can see the unsupported
//! variable in the output. Substitution is a single pass; resolved values
//! are never re-scanned for tokens.

use super::ReplyTemplate;
use crate::genealogy::superior;
use crate::member::{Member, MemberDirectory};
use chrono::Utc;
use std::collections::HashMap;

/// Supported variables and their fallback strings
///
/// This is the whole catalogue; dotted paths are enumerated here too rather
/// than resolved by reflection.
const DEFAULTS: &[(&str, &str)] = &[
    ("name", "User"),
    ("first_name", "User"),
    ("last_name", "User"),
    ("email", "N/A"),
    ("username", "User"),
    ("riscoin_id", "N/A"),
    ("invested_amount", "0.00"),
    ("age", "N/A"),
    ("gender", "N/A"),
    ("inviters_code", "N/A"),
    ("assistant.riscoin_id", "N/A"),
];

fn default_for(identifier: &str) -> Option<&'static str> {
    DEFAULTS
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, fallback)| *fallback)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read a catalogue identifier off the member record
///
/// Returns None when the identifier is unknown or its value is absent; the
/// caller then falls back to the catalogue default.
fn resolve<D: MemberDirectory + ?Sized>(
    identifier: &str,
    member: &Member,
    directory: &D,
) -> Option<String> {
    match identifier {
        "name" => non_empty(&member.display_name()),
        "first_name" => non_empty(&member.first_name),
        "last_name" => non_empty(&member.last_name),
        "email" => non_empty(&member.email),
        "username" => non_empty(&member.username),
        "riscoin_id" => non_empty(&member.referral_code),
        "invested_amount" => Some(format_amount(member.invested_amount)),
        "age" => member
            .age(Utc::now().date_naive())
            .map(|a| a.to_string()),
        "gender" => member.gender.map(|g| g.as_str().to_string()),
        "inviters_code" => member.inviter_code.clone(),
        "assistant.riscoin_id" => superior(directory, member).map(|s| s.referral_code.clone()),
        _ => None,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Render one block of text for a member
pub fn render<D: MemberDirectory + ?Sized>(
    content: &str,
    member: &Member,
    directory: &D,
    overrides: &HashMap<String, String>,
) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }

        // Collect a candidate identifier up to the closing brace
        let mut end = None;
        for (offset, pc) in content[start + 1..].char_indices() {
            if pc == '}' {
                end = Some(start + 1 + offset);
                break;
            }
            if !is_identifier_char(pc) {
                break;
            }
        }

        let Some(close) = end else {
            // Not a token; emit the brace and move on
            out.push(c);
            continue;
        };

        let identifier = &content[start + 1..close];
        if identifier.is_empty() {
            out.push(c);
            continue;
        }

        let replacement = overrides
            .get(identifier)
            .cloned()
            .or_else(|| resolve(identifier, member, directory))
            .or_else(|| default_for(identifier).map(str::to_string));

        match replacement {
            Some(value) => out.push_str(&value),
            // Unknown variable: leave the token visible
            None => {
                out.push('{');
                out.push_str(identifier);
                out.push('}');
            }
        }

        // Skip past the consumed token
        while let Some(&(idx, _)) = chars.peek() {
            if idx > close {
                break;
            }
            chars.next();
        }
    }

    out
}

/// Render a full template: active items only, sorted by order, joined with a
/// blank line
pub fn render_template<D: MemberDirectory + ?Sized>(
    template: &ReplyTemplate,
    member: &Member,
    directory: &D,
    overrides: &HashMap<String, String>,
) -> String {
    template
        .active_items()
        .iter()
        .map(|item| render(&item.body, member, directory, overrides))
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// Format a monetary amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, frac)
}

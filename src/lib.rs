//! Referral System - genealogy aggregation and support-message engine for a membership program
//!
//! This library provides:
//! - Member directory with self-referential inviter relationships
//! - Referral tree traversal and team statistics (cycle-safe)
//! - Reply template rendering with an enumerated variable catalogue
//! - Compound-growth signal projections with tabular CSV export

pub mod member;
pub mod genealogy;
pub mod template;
pub mod projection;

// Re-export commonly used types
pub use member::{Member, MemberDirectory, InMemoryDirectory};
pub use genealogy::{SubtreeStatistics, subtree_statistics, superior};
pub use template::{ReplyTemplate, ReplyTemplateItem, render, render_template};
pub use projection::{ProjectionEngine, ProjectionParams, DayRecord, ProjectionResult};

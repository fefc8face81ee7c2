//! Referral tree traversal and team statistics

mod aggregator;

pub use aggregator::{SubtreeStatistics, subtree_statistics, superior, levels};

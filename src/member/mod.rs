//! Member records, directory access, and roster loading

mod data;
mod directory;
pub mod loader;

pub use data::{Member, Gender};
pub use directory::{MemberDirectory, InMemoryDirectory};
pub use loader::{DirectoryError, load_members, load_members_from_reader};

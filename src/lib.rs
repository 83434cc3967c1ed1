//! Library interface for pivot - portable app version switching via
//! directory links.
//!
//! The engine keeps two pools next to each other: `Versions/` holds one
//! folder per installed version of any app, `Persists/` holds the directory
//! links (symlinks or junctions) that designate the active version per app.

pub mod config;
pub mod error;
pub mod groups;
pub mod link;
pub mod normalize;
pub mod resolve;
pub mod scan;

// Re-export the engine surface collaborators actually drive
pub use config::PoolLayout;
pub use error::{PivotError, Result};
pub use groups::{AppGroup, compute_groups, unlinked_versions};
pub use link::create_link;
pub use normalize::app_name;

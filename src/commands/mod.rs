//! Command implementations for the pivot CLI
//!
//! - **list**: render the reconciled app groups, plain or JSON
//! - **link**: create or replace the active-version link for one app
//! - **unlinked**: the legacy "what has no link yet" view

pub mod link;
pub mod list;

pub use link::link;
pub use list::{list, unlinked};

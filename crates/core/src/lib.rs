//! Domain logic for the burner catalog: catalog filtering and sorting,
//! product form rules, contact links, and the admin session guard.
//!
//! No database or HTTP types live here.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod product;
pub mod roles;
pub mod search;
pub mod session;
pub mod types;

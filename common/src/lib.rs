//! Domain logic shared by the portal frontend: wire models, the response
//! envelope, list/filter/pagination state, dirty-field patches, validation
//! rules, session cookies and routing.
//!
//! Everything here is free of browser APIs so it can be exercised with plain
//! `cargo test` on the host.

pub mod config;
pub mod dashboard;
pub mod diff;
pub mod drive_date;
pub mod envelope;
pub mod error;
pub mod model;
pub mod pagination;
pub mod query;
pub mod resource;
pub mod route;
pub mod sequence;
pub mod session;
pub mod validation;

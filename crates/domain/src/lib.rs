//! # plmhub-domain
//!
//! Pure domain model for the plmhub workspace dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Workspaces** (tenant units holding documents, parts, users, products)
//! - Define **Accounts** (authenticated viewers and their administration rights)
//! - Define **StatsOverview** (point-in-time membership counts of one workspace)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.
//! All IO boundaries live in the adapter crates.

pub mod error;
pub mod id;
pub mod time;

pub mod account;
pub mod stats;
pub mod workspace;

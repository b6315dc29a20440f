//! Convoy Core
//!
//! Core types and abstractions for the Convoy CI status system.
//!
//! This crate contains:
//! - Domain types: the Repository resource and its run-status ledger
//! - Namespace resolution for resource addressing
//! - The clock abstraction that keeps report output deterministic

pub mod clock;
pub mod domain;
pub mod namespace;

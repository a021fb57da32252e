//! Core domain logic for ropf
//!
//! This module contains pure domain logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Value types, entities and aggregates
//! - `registry` - Get-or-create stores for shared entities
//! - `services/` - Read-only queries over parsed opinion polls

pub mod models;
pub mod registry;
pub mod services;

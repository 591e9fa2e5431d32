//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for poem records.
//! - Isolate SQLite query details from the collection layer.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Read paths reject corrupt persisted state instead of masking it.

pub mod poem_repo;

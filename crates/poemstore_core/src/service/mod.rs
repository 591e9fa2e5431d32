//! Collection layer over the poem repository.
//!
//! # Responsibility
//! - Orchestrate repository calls into the collection lifecycle
//!   (construct, fetch, mutate).
//! - Keep callers decoupled from storage details.

pub mod poem_collection;

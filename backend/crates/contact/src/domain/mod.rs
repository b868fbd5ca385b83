//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (ContactSubmission, VerificationResult, OutgoingMail)
//! - Domain value objects (email format rule, site branding)
//! - Outcome type mapped to the caller-visible response text
//! - Mail templates
//! - Port traits for the store, verifier and mail transport

pub mod entities;
pub mod outcome;
pub mod repository;
pub mod templates;
pub mod value_objects;

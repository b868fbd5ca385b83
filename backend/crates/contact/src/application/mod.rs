//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod send_test_mail;
pub mod submit_contact;
pub mod verify_token;

pub use send_test_mail::SendTestMailUseCase;
pub use submit_contact::{SubmitContactInput, SubmitContactOutput, SubmitContactUseCase};
pub use verify_token::VerifyTokenUseCase;

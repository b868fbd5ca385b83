//! Infrastructure Layer
//!
//! Implementations of the domain ports.

pub mod mail;
pub mod postgres;
pub mod recaptcha;

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Outbound HTTP client construction (timeouts, user agent)
//! - HTML escaping for templated emails
//! - Client identification from request headers

pub mod client;
pub mod html;
pub mod http_client;

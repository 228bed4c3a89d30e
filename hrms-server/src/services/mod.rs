//! Services
//!
//! - [`http`] - router assembly and request logging

pub mod http;

//! Outbound calls to third-party automation services.

pub mod n8n;

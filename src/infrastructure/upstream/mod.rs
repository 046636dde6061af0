//! HTTP forwarding to sub-applications hosted outside this process.

pub mod client;

pub use client::{MAX_FORWARDED_BODY, UpstreamClient, UpstreamError};

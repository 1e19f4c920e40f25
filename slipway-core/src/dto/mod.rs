//! Data Transfer Objects for the trigger endpoint
//!
//! Wire payloads exchanged with callers of the deploy API.

pub mod deploy;

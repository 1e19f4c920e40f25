//! Slipway Core
//!
//! Core types for the Slipway deploy service.
//!
//! This crate contains:
//! - Domain types: image identities, observed instances, deploy outcomes
//! - DTOs: payloads exchanged over the trigger endpoint

pub mod domain;
pub mod dto;

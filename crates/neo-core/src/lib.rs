//! # neo-core
//!
//! Core types and the scoring/alerting pipeline for neowatch.
//!
//! This crate provides the pieces every other neowatch crate builds on:
//! - Entity structs for feed objects, watch entries, users, and store records
//! - The risk scorer and the batch threat aggregator
//! - The proximity alert detector
//! - Batch statistics shown next to the threat level
//! - The session-scoped pipeline that re-runs detection on either trigger
//! - Policy constants and cross-cutting error types
//!
//! Nothing here performs I/O. Feed fetching lives in `neo-feed`, record
//! persistence in `neo-db`.

pub mod alerts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod pipeline;
pub mod policy;
pub mod responses;
pub mod risk;
pub mod stats;
pub mod threat;

//! Workforce Metrics Aggregation & Report Assembly Engine
//!
//! This crate turns a snapshot of staff, attendance and recruitment records
//! into derived metrics for live display and into a paginated, multi-section
//! report that a document exporter can serialize.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod report;
pub mod telemetry;

//! Core library for the recruitment tracking dashboard.
//!
//! Everything the dashboard shows is derived from a synthetic, in-memory
//! dataset generated once per session: job postings, the applicants attached
//! to them, and issue reports. The [`recruiting`] module owns the entity
//! model, the generators, the session store, and the query engine; the
//! presentation layer consumes them only through the read-only surface in
//! [`recruiting::router`].

pub mod config;
pub mod error;
pub mod recruiting;
pub mod telemetry;

//! annuityhelp.net Lead Intake API Library
//!
//! This library provides the core functionality for the annuityhelp.net lead
//! intake API: one endpoint that validates a wizard submission, maps it onto
//! the GoHighLevel (GHL) contact schema, and forwards it with a single
//! authenticated call.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `ghl_client`: GHL contacts API client.
//! - `handlers`: Router assembly, shared state, and the health endpoint.
//! - `intake`: Name splitting, normalization, and payload mapping.
//! - `lead_handler`: The lead intake HTTP handler.
//! - `models`: Request/response and payload models.

pub mod config;
pub mod errors;
pub mod ghl_client;
pub mod handlers;
pub mod intake;
pub mod lead_handler;
pub mod models;

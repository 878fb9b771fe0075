//! Shared data models for the perfnotes platform.
//!
//! These types describe the wire contracts between the web client and the
//! external REST backend, plus the client-side note filtering used by the
//! notes views.

pub mod models;

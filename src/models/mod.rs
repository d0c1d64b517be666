//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Movie record model and request/response types
pub mod movie;

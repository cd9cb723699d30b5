//! Round Table - Conversations with historical figures
//!
//! This crate implements the conversation flow for The Round Table: a user
//! message fans out to a set of historical-figure personas, each of which
//! answers via an AI completion provider or a deterministic fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Strive-Images - Storefront image ingestion tool
//!
//! This library crate exposes the configuration and ingestion driver for
//! integration testing.

pub mod config;
pub mod ingest;

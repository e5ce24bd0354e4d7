//! Test Module
//!
//! Comprehensive test suite for the TextSight backend.
//!
//! ## Test Categories
//! - `analysis_tests`: metrics, keyword extraction, insight and summary rules
//! - `api_tests`: full-router behavior, CORS, enrichment wiring

pub mod analysis_tests;

//! Record API integration test suite
//!
//! End-to-end coverage of the public record surface: construction with
//! defaults and overrides, structural equality (nested records and
//! function fields included), plain serialization, and non-mutating
//! updates.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test record_api
//!
//! # Run one module
//! cargo test --test record_api equality::
//! ```


mod equality;
mod properties;
mod update;

//! # Builders
//!
//! This module provides builder patterns for configuring the key transformation.
//!
//! ## Modules
//!
//! - [`transform_builder`] - Builder holding a padded seed and a round count
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults, useful when the same
//! seed and round count are applied to many keys.

pub mod transform_builder;

//! Tests for template engine
//!
//! Organized into focused submodules, one per engine stage.

use super::*;

// Test helper functions
mod helpers;


// Compilation tests
mod compile;

mod compose_basic;

// Validation, strict mode and error tests
mod errors;

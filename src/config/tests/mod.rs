//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Accessor defaults and blank-value handling
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod validation;

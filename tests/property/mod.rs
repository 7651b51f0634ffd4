//! Property-based tests for argument validation

mod arity;

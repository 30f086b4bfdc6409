//! Property-based tests
//!
//! Uses proptest to check the hashing and token laws over generated input.

mod password_proptest;
mod token_proptest;

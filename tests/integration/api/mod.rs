//! API integration tests

mod auth_test;
mod layout_test;

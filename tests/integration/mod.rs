//! Integration tests

mod audit_tests;
mod config_tests;
mod resolver_tests;
mod role_tests;
mod strings_tests;

//! Test Module
//!
//! Test suite for the conversational core.
//!
//! ## Test Categories
//! - `brain_tests`: classification priority, reply selection, emission layout
//! - `session_tests`: history, counters, start and clear
//! - `actor_tests`: conversation actor delivery on virtual time
//! - `integration_tests`: multi-turn conversations and file-loaded content

pub mod brain_tests;
pub mod integration_tests;

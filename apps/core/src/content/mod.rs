//! # Content Module
//!
//! Read-only therapeutic content: trigger tables, canned responses, exercises,
//! coping strategies and sentence pools. Loaded once and shared behind `Arc`.

pub mod bank;
mod defaults;

pub use bank::{CategoryContent, ContentBank, CopingStrategies, Exercise};

//! Shared helpers for the runnable demos.
#![warn(missing_docs)]

pub mod common;

//! Shared math helpers.

pub mod angles;

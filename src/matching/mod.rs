//! Fuzzy matching utilities for contact lookup.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{NameMatch, NameMatcher};

//! CLI functionality for the `csc` tool
//!
//! This module contains all CLI-related functionality including:
//! - Rare combination search
//! - Index statistics
//! - Output formatting
//! - Logging setup

pub mod index;
pub mod logging;
pub mod output;
pub mod rare;

//! # cargo-ghchangelog
//!
//! Changelog customization for repositories hosted on GitHub.
//!
//! ## Overview
//!
//! The crate supplies the pieces a changelog generator plugs in: the commit
//! subject grammar, the change type headings and their order, the version bump
//! for each change type, and two hooks. The message hook turns a trailing
//! `(#123)` into an issue link, drops the scope, clears the commit body and
//! thanks contributors from outside the GitHub organization.
//!
//! ## Usage
//!
//! ```bash
//! # Which repository would the changelog link to?
//! cargo ghchangelog repo
//!
//! # Thanks suffix for a couple of commits
//! cargo ghchangelog thanks HEAD HEAD~1
//!
//! # Rewritten changelog entries, without GitHub lookups
//! cargo ghchangelog --no-thanks entry HEAD~3 HEAD~2 HEAD~1 HEAD
//! ```
//!
//! ## Configuration
//!
//! Configuration can be specified in `.config/ghchangelog.toml` in your
//! project directory or `~/.config/ghchangelog.toml` for user-wide settings.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling and default settings management
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// Reading commits from the local repository
pub mod git;

/// Changelog hook functions
pub mod hooks;

/// Registration entry point bundling rules, hooks and the thanker
pub mod plugin;

/// Commit classification and version bump tables
pub mod rules;

/// Command orchestration
pub mod runner;

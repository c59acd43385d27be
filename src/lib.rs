//! rskata: personal toolkit for algorithmic coding-problem solutions
//!
//! Fixtures (binary tree, linked list) with their textual codecs, a
//! problem catalog keyed by problem id, and a layered configuration
//! loader, exposed through a small CLI.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

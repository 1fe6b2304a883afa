//! Operations modules for interacting with external version control systems.
//!
//! - [`git`]: Runs the git CLI and resolves it on the search path
//!
//! Each submodule provides a trait-based abstraction with a real implementation
//! and, in tests, a mockall mock.

pub mod git;

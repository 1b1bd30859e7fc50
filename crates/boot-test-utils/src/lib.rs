//! Shared test utilities for the venv bootstrap workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for a throwaway project directory

pub mod project;

pub use project::TestProject;

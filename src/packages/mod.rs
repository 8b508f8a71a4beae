//! Package support lookup for the PyScript runtime
//!
//! This module answers one question per package name: is it known to run
//! under PyScript, and if not, does PyPI offer an architecture-independent
//! wheel for its current release?
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│    Cache    │◀────│   Matcher   │
//! │  (PyScript) │     │ (JSON file) │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Index    │
//!                                         │   (PyPI)    │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: On-disk copy of the supported packages manifest
//! - [`matcher`]: Per-package classification
//! - [`registry`]: Fetcher traits for the manifest and the package index
//! - [`registries`]: Concrete fetchers (PyScript packages API, PyPI JSON API)
//! - [`error`]: Error types for fetch, cache and match operations
//! - [`types`]: Manifest, index record and match result types

pub mod cache;
pub mod error;
pub mod matcher;
pub mod registries;
pub mod registry;
pub mod types;

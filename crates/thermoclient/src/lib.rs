//! Typed async client for the IR thermal-monitoring HTTP API.
//!
//! The endpoint surface in [`api`] is generated by `thermogen` from the
//! backend's OpenAPI schema; the modules around it are hand-written: the
//! shared [`transport::Transport`] executor, the three-outcome result model
//! in [`error`], the environment-driven [`config`], and an optional
//! SQLite-backed [`cache`] consulted by the `*_cached` accessors.
//!
//! Every call is an independent async round-trip. There is no retry, no
//! internal logging of failures, and no shared mutable state beyond the
//! optional cache; dropping a call future abandons it without affecting
//! other in-flight calls.
#![deny(unsafe_code)]

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use cache::{CacheConfig, CacheError, ResponseCache};
pub use client::ThermalClient;
pub use config::{BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::{
    ApiError, ApiResult, FieldError, LocSegment, TransportFailure, ValidationErrors,
};

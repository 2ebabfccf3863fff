//! Typed-client generation for the IR thermal-monitoring HTTP API.
//!
//! The pipeline is a batch transformation: an OpenAPI schema document goes
//! in, a single Rust client module comes out. The emitted module lives in the
//! `thermoclient` crate and binds every backend operation to the shared
//! transport layer there.
#![deny(unsafe_code)]

pub mod generation;
pub mod openapi;
pub mod output;

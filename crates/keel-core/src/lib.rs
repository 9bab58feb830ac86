//! Core types and configuration for keel.
//!
//! This crate defines the `keel.toml` schema ([`KeelConfig`]), the
//! branch-to-deployment tables ([`Deployment`]), the Dockerfile render
//! parameters ([`RenderParams`]), and shared error types.

pub mod config;
pub mod deployment;
pub mod error;
pub mod params;

pub use config::{DockerfileConfig, KeelConfig};
pub use deployment::Deployment;
pub use error::{Error, Result};
pub use params::{GENERATOR, RenderParams, iso_timestamp};

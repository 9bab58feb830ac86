//! Dockerfile generation for keel.
//!
//! # Pipeline
//!
//! ```text
//! keel dockerfile
//!   1. Template   ── read res/ECR.Dockerfile.hbs
//!   2. Params     ── RenderParams::load(params.json)
//!   3. Stamp      ── generator + timestamp overwritten
//!   4. Render     ── DockerfileGenerator::render()
//!   5. Write      ── Dockerfile (always overwritten)
//! ```
//!
//! # Placeholders
//!
//! Templates are Handlebars. `{{ name }}` inserts an HTML-escaped value and
//! `{{{ name }}}` inserts it raw. Dotted paths reach into nested objects and
//! keys missing from the parameters render as the empty string. Arrays print
//! comma-joined, as Handlebars does.

pub mod dockerfile;

pub use dockerfile::{DockerfileGenerator, RenderError, write_dockerfile};

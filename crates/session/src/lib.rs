//! # notos-session
//!
//! The create/receive/destroy lifecycle around the three pipeline
//! stages. Each stage gets its own session type owning an independent
//! copy of its configuration; `receive` takes a loosely-typed JSON
//! request (structured or JSON-encoded text, including nested fields)
//! and always returns a `{status, ...}` reply, with failures rendered
//! as `{status: "error", message}` rather than raised.
//!
//! Lifecycle statuses: `initialized` from create, `success`/`error`
//! from receive, `destroyed` from destroy.

mod converter;
mod error;
mod generator;
mod interpolator;
mod payload;
mod reply;

pub use converter::ConverterSession;
pub use error::SessionError;
pub use generator::{GeneratorCreate, GeneratorSession};
pub use interpolator::InterpolatorSession;
pub use payload::decode;
pub use reply::failure;

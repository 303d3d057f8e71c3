//! # plonecli-core
//!
//! Core library for the Plone CLI providing:
//! - The template registry (alias -> mr.bob template resolution)
//! - Per-invocation context with package-root detection
//! - External command assembly (`CommandSpec`) and blocking execution
//! - The command dispatcher that plans argument vectors for every operation

pub mod context;
pub mod dispatch;
pub mod error;
pub mod exec;
pub mod registry;

pub use context::InvocationContext;
pub use error::{Error, Result};
pub use exec::CommandSpec;
pub use registry::{TemplateEntry, TemplateRegistry};

//! Generation layer: the generator capability, instruction templates, and the
//! adapter that turns generator output into typed results or nothing.

mod adapter;
mod config;
mod error;
mod generator;
pub mod prompt;
mod stub;

pub use adapter::{Adapter, StructuredRequest};
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generator::{Generator, Instruction};
pub use stub::{ScriptedGenerator, Unavailable};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpGenerator;

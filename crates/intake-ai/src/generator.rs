//! The generation capability the intake depends on.

use std::sync::Arc;

use async_trait::async_trait;
use intake_core::OutputSchema;
use serde_json::Value;

use crate::GenerationError;

/// A filled-in instruction ready to send to a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Template name, for logs.
    pub name: &'static str,
    pub text: String,
}

/// Anything that can turn an instruction into a JSON value shaped like `schema`.
///
/// Implementations make one attempt per call. Whether the value really
/// conforms is checked by the [`Adapter`](crate::Adapter), not here.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        instruction: &Instruction,
        schema: &OutputSchema,
    ) -> Result<Value, GenerationError>;
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Arc<G> {
    async fn generate(
        &self,
        instruction: &Instruction,
        schema: &OutputSchema,
    ) -> Result<Value, GenerationError> {
        (**self).generate(instruction, schema).await
    }
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Box<G> {
    async fn generate(
        &self,
        instruction: &Instruction,
        schema: &OutputSchema,
    ) -> Result<Value, GenerationError> {
        (**self).generate(instruction, schema).await
    }
}

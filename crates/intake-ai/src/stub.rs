//! Deterministic generators for tests and offline runs.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use intake_core::OutputSchema;
use serde_json::Value;

use crate::{GenerationError, Generator, Instruction};

/// Replies with the same value (or the same failure) on every call.
pub struct ScriptedGenerator {
    reply: Result<Value, String>,
    calls: AtomicUsize,
    last: Mutex<Option<Instruction>>,
}

impl ScriptedGenerator {
    pub fn returning(value: Value) -> Self {
        Self::new(Ok(value))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(Err(reason.into()))
    }

    fn new(reply: Result<Value, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent instruction received.
    pub fn last_instruction(&self) -> Option<Instruction> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(
        &self,
        instruction: &Instruction,
        _schema: &OutputSchema,
    ) -> Result<Value, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(instruction.clone());
        }
        self.reply
            .clone()
            .map_err(GenerationError::Unavailable)
    }
}

/// A generator that always fails, forcing the fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

#[async_trait]
impl Generator for Unavailable {
    async fn generate(
        &self,
        _instruction: &Instruction,
        _schema: &OutputSchema,
    ) -> Result<Value, GenerationError> {
        Err(GenerationError::Unavailable(
            "no generator configured".to_string(),
        ))
    }
}

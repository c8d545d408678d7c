//! Text-generation service seam.
//!
//! The core only needs "prompt in, one completion out"; [`OpenAiClient`]
//! is the production implementation, tests plug in their own.

pub mod openai;

pub use openai::OpenAiClient;

use crate::errors::AppResult;

/// A single-shot text completion service.
pub trait TextGenerator {
    fn complete(&self, prompt: &str, temperature: f32) -> AppResult<String>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn complete(&self, prompt: &str, temperature: f32) -> AppResult<String> {
        (**self).complete(prompt, temperature)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn complete(&self, prompt: &str, temperature: f32) -> AppResult<String> {
        (**self).complete(prompt, temperature)
    }
}

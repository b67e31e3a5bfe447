//! Data models shared between the tokenizer and the renderers.

pub mod token;

pub use token::Token;

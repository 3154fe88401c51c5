//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and interactive prompts.

mod prompt;
mod spinner;

pub use prompt::{prompt_password, prompt_text, value_or_prompt};
pub use spinner::{clear_spinner, create_spinner, finish_spinner};

//! UI utilities for terminal output
//!
//! This module provides the discovery progress bar and the token prompt.

mod progress;
mod prompt;

pub use progress::{clear_progress, create_progress_bar, finish_progress, set_progress};
pub use prompt::prompt_token;

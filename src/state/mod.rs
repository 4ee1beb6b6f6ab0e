//! Application state module

mod app_state;
mod faq;
mod forms;

pub use app_state::*;
pub use faq::*;
pub use forms::*;

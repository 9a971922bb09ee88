//! CLI command handlers. Each command is in its own file.

mod classify;
mod completions;
mod extract;
mod indicators;
mod model_info;
mod page;

pub use classify::run_classify;
pub use completions::run_completions;
pub use extract::run_extract;
#[cfg(test)]
pub(crate) use extract::format_value;
pub use indicators::run_indicators;
pub use model_info::run_model_info;
pub use page::PageSource;

pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::DegreesApp;
pub use args::Args;
pub use search::{PromptError, SearchRequest, create_search_request, prompt_for_person};
pub use utils::format_number;

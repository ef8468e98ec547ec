pub mod shared_prompt;

pub use shared_prompt::Model as SharedPrompt;

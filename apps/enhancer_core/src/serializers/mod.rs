pub mod api_error;
pub mod shared_prompt;

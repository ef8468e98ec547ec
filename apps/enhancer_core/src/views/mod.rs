pub mod health;
pub mod shared_prompt;

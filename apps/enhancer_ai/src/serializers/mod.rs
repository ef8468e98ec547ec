pub mod improve_prompt;

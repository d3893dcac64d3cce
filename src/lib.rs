pub mod config;
pub mod env_file;
pub mod portal;
pub mod provision;

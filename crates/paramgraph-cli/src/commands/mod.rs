pub mod build;
pub mod dump;
pub mod input;

pub mod config;
pub mod content;
pub mod details;
pub mod input;
pub mod render;
pub mod reveal;
pub mod theme;

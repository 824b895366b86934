pub mod clock;
pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod state;
pub mod terminal;

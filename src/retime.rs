pub mod speed;
pub mod window;

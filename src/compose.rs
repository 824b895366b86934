pub mod compositor;
pub mod disposal;
pub mod frame;

pub mod handler;

pub use handler::{HeldKeys, InputHandler};

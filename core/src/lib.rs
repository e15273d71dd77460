pub use chip8::{AudioTrigger, Chip8, Clock, PixelOutput};
pub use error::Chip8Error;
pub use keymap::keymap;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod keymap;
mod keypad;
mod operations;
pub mod state;

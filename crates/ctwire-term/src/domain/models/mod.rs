mod action;
mod event;

pub use action::*;
pub use event::*;

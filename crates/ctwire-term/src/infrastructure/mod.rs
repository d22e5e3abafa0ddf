//! Drawing backends for the trainer's ports.

pub mod surface;

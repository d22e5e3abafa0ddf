mod canvas;
mod status_line;

pub use canvas::*;
pub use status_line::*;

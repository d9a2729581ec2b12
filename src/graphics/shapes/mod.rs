mod rect;
pub use rect::*;

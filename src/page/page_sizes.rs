use crate::{graphics::size::Size, units::Pt};

/// A4 paper size
pub const A4: Size = Size::new(Pt(595f32), Pt(842f32));

//! Terminal theme: palette, semantic styles and icon glyphs

pub mod icons;
pub mod palette;
pub mod styles;

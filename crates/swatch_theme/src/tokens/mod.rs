//! Design tokens for theming
//!
//! Tokens are split into two layers:
//! - Primitives: color ramps, foundations, font tables, dimensions
//! - Roles: semantic names bound to primitive keys (color, font, size)
//!
//! Palettes sit on top of the role layer, one per display mode.

mod color;
mod font;
mod palette;
mod size;

pub use color::*;
pub use font::*;
pub use palette::*;
pub use size::*;

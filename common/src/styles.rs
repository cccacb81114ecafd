//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! Both fonts are monospaced, so the pixel width of a string only depends
//! on its character count and the font metrics. That is what the renderer
//! relies on to center the time line.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use profont::PROFONT_18_POINT;

use crate::colors::INK;

// =============================================================================
// Font References
// =============================================================================

/// Small font (5x8 pixels). Greeting, setting label, loading text.
pub const SMALL_FONT: &MonoFont = &FONT_5X8;

/// Large font (`ProFont` 18pt, 12px advance). Time and date lines.
/// Eight HH:MM:SS characters take 96 of the 128 available pixels.
pub const LARGE_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

pub const SMALL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(SMALL_FONT, INK);

pub const LARGE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(LARGE_FONT, INK);

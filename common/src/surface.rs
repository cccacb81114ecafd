//! Frame-scoped text drawing surface.
//!
//! The renderer talks to the display through the small cursor-based
//! [`Surface`] interface: begin a frame, position a cursor, pick a font,
//! print, measure, end the frame. [`Canvas`] implements it on top of any
//! monochrome embedded-graphics `DrawTarget`.
//!
//! # Frame Scope
//!
//! [`Frame`] is the only way the renderer opens a frame. Creating it clears
//! the surface, dropping it ends the frame and presents it, so every loop
//! iteration flushes exactly once no matter which lines were drawn.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::colors::BACKGROUND;
use crate::styles::{LARGE_STYLE, SMALL_STYLE};

/// Fonts available to the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Font {
    #[default]
    Small,
    Large,
}

impl Font {
    #[inline]
    pub const fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        match self {
            Self::Small => SMALL_STYLE,
            Self::Large => LARGE_STYLE,
        }
    }
}

/// Cursor-based text drawing with explicit frame boundaries.
pub trait Surface {
    /// Start a new frame on a blank screen.
    fn begin_frame(&mut self);

    /// Move the cursor to the left end of a text baseline.
    fn set_cursor(
        &mut self,
        pos: Point,
    );

    fn select_font(
        &mut self,
        font: Font,
    );

    /// Draw `text` at the cursor and advance the cursor past it.
    fn draw_text(
        &mut self,
        text: &str,
    );

    /// Pixel width of `text` in the selected font.
    fn text_width(
        &self,
        text: &str,
    ) -> u32;

    /// Finish the frame and push it to the screen.
    fn end_frame(&mut self);
}

/// An open frame. Ends (and flushes) the frame when dropped.
pub struct Frame<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Frame<'a, S> {
    pub fn begin(surface: &'a mut S) -> Self {
        surface.begin_frame();
        Self { surface }
    }

    /// Print `text` with its baseline starting at `pos`.
    pub fn print_at(
        &mut self,
        pos: Point,
        font: Font,
        text: &str,
    ) {
        self.surface.select_font(font);
        self.surface.set_cursor(pos);
        self.surface.draw_text(text);
    }

    pub fn text_width(
        &mut self,
        font: Font,
        text: &str,
    ) -> u32 {
        self.surface.select_font(font);
        self.surface.text_width(text)
    }
}

impl<S: Surface + ?Sized> Drop for Frame<'_, S> {
    fn drop(&mut self) { self.surface.end_frame(); }
}

/// Pushes a finished frame to the physical screen (flush, window update, ...).
pub trait Present {
    fn present(&mut self);
}

/// [`Surface`] over a monochrome `DrawTarget`.
///
/// Draw errors are ignored: a failed glyph leaves the cursor where it was
/// and the next frame redraws everything anyway.
pub struct Canvas<D> {
    target: D,
    cursor: Point,
    font: Font,
}

impl<D> Canvas<D> {
    pub const fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            font: Font::Small,
        }
    }

    #[inline]
    pub const fn target(&self) -> &D { &self.target }

    #[inline]
    pub const fn target_mut(&mut self) -> &mut D { &mut self.target }

    pub fn into_inner(self) -> D { self.target }
}

impl<D> Surface for Canvas<D>
where
    D: DrawTarget<Color = BinaryColor> + Present,
{
    fn begin_frame(&mut self) {
        self.target.clear(BACKGROUND).ok();
        self.cursor = Point::zero();
    }

    fn set_cursor(
        &mut self,
        pos: Point,
    ) {
        self.cursor = pos;
    }

    fn select_font(
        &mut self,
        font: Font,
    ) {
        self.font = font;
    }

    fn draw_text(
        &mut self,
        text: &str,
    ) {
        let drawn = Text::with_baseline(text, self.cursor, self.font.style(), Baseline::Alphabetic).draw(&mut self.target);
        if let Ok(next) = drawn {
            self.cursor = next;
        }
    }

    fn text_width(
        &self,
        text: &str,
    ) -> u32 {
        self.font
            .style()
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
            .width
    }

    fn end_frame(&mut self) { self.target.present(); }
}

// =============================================================================
// Unit Tests
// =============================================================================

use crate::Coords;

/// An RGB fill color for the drawing surface.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BACKGROUND: Color = Color { r: 0x1e, g: 0x1e, b: 0x1e };
pub const SNAKE: Color = Color { r: 0xfe, g: 0xf3, b: 0xec };
pub const FOOD: Color = Color { r: 0xff, g: 0x47, b: 0x57 };
pub const TEXT: Color = Color { r: 0xff, g: 0xff, b: 0xff };

/// Drawing surface for the game board. All coordinates are board pixels with
/// the origin at the top-left corner.
pub trait Canvas {
    /// Clears the whole surface.
    fn clear(&mut self) -> crossterm::Result<()>;

    /// Fills a `width` x `height` rectangle whose top-left corner is `pos`.
    fn fill_rect(&mut self, pos: Coords, width: i32, height: i32, color: Color) -> crossterm::Result<()>;

    /// Draws one line of text starting at `pos`.
    fn fill_text(&mut self, text: &str, pos: Coords, color: Color) -> crossterm::Result<()>;
}

//! Vertex colors and the demo palette.
//!
//! Colors are kept as floating point channels in the 0-255 range so that
//! interpolation can run without intermediate rounding. They are only
//! quantised to RGBA8 when written into a frame buffer.

/// An RGBA color with channels in the 0-255 range.
///
/// Channels are not clamped: blending may produce values slightly outside
/// the range, which is resolved when the color is packed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32, g as f32, b as f32, a as f32)
    }

    /// Build an opaque color from a `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgba((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }

    pub fn channels(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantise to RGBA8, rounding to nearest and saturating at 0 and 255.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        // `as u8` saturates, and NaN becomes 0
        self.channels().map(|c| c.round() as u8)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Colors assigned to scene nodes, cycled by node index.
pub const PALETTE: [Color; 3] = [
    Color::from_hex(0x900C3E),
    Color::from_hex(0xFF5733),
    Color::from_hex(0xFFC300),
];

/// Palette color for the node at `index`.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

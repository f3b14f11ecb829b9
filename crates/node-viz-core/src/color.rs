/// RGB color with components in the 0.0-1.0 range.
///
/// The core stays free of any graphics crate; the renderer converts this to
/// whatever color type it draws with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: f32) -> Self {
        Self::rgb(level, level, level)
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

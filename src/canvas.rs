pub type Rgba = [u8; 4];

pub const BACKGROUND: Rgba = [0x00, 0x00, 0x00, 0xFF];
pub const HOT_PINK: Rgba = [0xFF, 0x69, 0xB4, 0xFF];

/// Drawing surface the renderer paints onto. Coordinates are in logical
/// units matching the framebuffer resolution.
pub trait Canvas {
    /// Flood the whole surface with a solid color.
    fn fill(&mut self, color: Rgba);

    /// Set color and width for subsequent `line` calls.
    fn set_stroke(&mut self, color: Rgba, width: f32);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Filled circle in the stroke color, independent of stroke width.
    fn dot(&mut self, cx: f32, cy: f32, radius: f32);
}

use crate::canvas::{Canvas, Rgba};

/// `Canvas` over an RGBA8 framebuffer, row-major as handed out by
/// `pixels::Pixels::get_frame`.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    stroke: Rgba,
    half_stroke: f32,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
            stroke: [0xFF, 0xFF, 0xFF, 0xFF],
            half_stroke: 0.5,
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.frame[offset..offset + 4].copy_from_slice(&color);
    }

    /// Paint every pixel whose center lies within `reach` of the segment
    /// from (x1, y1) to (x2, y2). Off-surface geometry clips silently.
    fn paint_near_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, reach: f32) {
        let color = self.stroke;
        let min_x = (x1.min(x2) - reach).floor() as i32;
        let max_x = (x1.max(x2) + reach).ceil() as i32;
        let min_y = (y1.min(y2) - reach).floor() as i32;
        let max_y = (y1.max(y2) + reach).ceil() as i32;
        let reach_sq = reach * reach;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if distance_sq_to_segment(px, py, x1, y1, x2, y2) <= reach_sq {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn fill(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn set_stroke(&mut self, color: Rgba, width: f32) {
        self.stroke = color;
        self.half_stroke = width / 2.0;
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.paint_near_segment(x1, y1, x2, y2, self.half_stroke);
    }

    fn dot(&mut self, cx: f32, cy: f32, radius: f32) {
        self.paint_near_segment(cx, cy, cx, cy, radius);
    }
}

fn distance_sq_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let nx = x1 + t * dx - px;
    let ny = y1 + t * dy - py;
    nx * nx + ny * ny
}

use chrono::NaiveDateTime;

use crate::canvas::{Canvas, BACKGROUND, HOT_PINK};
use crate::segments::segments_for;

pub const SEGMENT_LENGTH: f32 = 40.0;
pub const SEGMENT_THICKNESS: f32 = 10.0;

const ORIGIN_X: f32 = 120.0;
const ORIGIN_Y: f32 = 60.0;
const PADDING: f32 = 15.0;
// Colon dots keep a fixed radius regardless of segment size.
const COLON_RADIUS: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Glyph {
    Digit { value: usize, x: f32, y: f32 },
    Colon { x: f32, y: f32 },
}

/// Draws the displayed time as seven-segment digits. Pure function of the
/// stored timestamp plus fixed geometry; safe to call on every redraw.
pub struct ClockRenderer {
    displayed_time: NaiveDateTime,
}

impl ClockRenderer {
    pub const WIDTH: u32 = 600;
    pub const HEIGHT: u32 = 160;

    pub fn new(time: NaiveDateTime) -> Self {
        Self {
            displayed_time: time,
        }
    }

    pub fn set_displayed_time(&mut self, time: NaiveDateTime) {
        self.displayed_time = time;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill(BACKGROUND);
        canvas.set_stroke(HOT_PINK, SEGMENT_THICKNESS);

        let label = self.displayed_time.format("%H:%M:%S").to_string();
        for glyph in layout_glyphs(&label) {
            match glyph {
                Glyph::Digit { value, x, y } => draw_digit(canvas, value, x, y, SEGMENT_LENGTH),
                Glyph::Colon { x, y } => draw_colon(canvas, x, y, SEGMENT_LENGTH),
            }
        }
    }
}

/// Places one glyph per character, left to right from the fixed origin.
/// Colons advance by less than a full digit cell.
fn layout_glyphs(label: &str) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(label.len());
    let mut x = ORIGIN_X;
    for character in label.chars() {
        if character == ':' {
            glyphs.push(Glyph::Colon { x, y: ORIGIN_Y });
            x += PADDING + 5.0;
        } else {
            // non-digit characters render as a blank cell
            let value = character.to_digit(10).map_or(usize::MAX, |d| d as usize);
            glyphs.push(Glyph::Digit {
                value,
                x,
                y: ORIGIN_Y,
            });
            x += SEGMENT_LENGTH + PADDING;
        }
    }
    glyphs
}

fn draw_digit(canvas: &mut dyn Canvas, value: usize, x: f32, y: f32, size: f32) {
    let half = size / 2.0;
    let endpoints = [
        (x, y, x + size, y),                      // top
        (x + size, y, x + size, y + half),        // upper right
        (x + size, y + half, x + size, y + size), // lower right
        (x, y + size, x + size, y + size),        // bottom
        (x, y + half, x, y + size),               // lower left
        (x, y, x, y + half),                      // upper left
        (x, y + half, x + size, y + half),        // middle
    ];

    let active = segments_for(value);
    for (&on, &(x1, y1, x2, y2)) in active.iter().zip(endpoints.iter()) {
        if on {
            canvas.line(x1, y1, x2, y2);
        }
    }
}

fn draw_colon(canvas: &mut dyn Canvas, x: f32, y: f32, size: f32) {
    let gap = size / 4.0;
    canvas.dot(x, y + gap, COLON_RADIUS);
    canvas.dot(x, y + 3.0 * gap, COLON_RADIUS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;
    use crate::frame::FrameCanvas;
    use chrono::NaiveDate;

    #[derive(Debug, PartialEq)]
    enum Op {
        Fill(Rgba),
        Stroke(Rgba, f32),
        Line(f32, f32, f32, f32),
        Dot(f32, f32, f32),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn fill(&mut self, color: Rgba) {
            self.ops.push(Op::Fill(color));
        }

        fn set_stroke(&mut self, color: Rgba, width: f32) {
            self.ops.push(Op::Stroke(color, width));
        }

        fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
            self.ops.push(Op::Line(x1, y1, x2, y2));
        }

        fn dot(&mut self, cx: f32, cy: f32, radius: f32) {
            self.ops.push(Op::Dot(cx, cy, radius));
        }
    }

    fn at(h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn label_is_zero_padded_24_hour() {
        let cases = [
            (at(8, 5, 9), "08:05:09"),
            (at(0, 0, 0), "00:00:00"),
            (at(23, 59, 59), "23:59:59"),
            (at(13, 30, 0), "13:30:00"),
        ];
        for (time, expected) in cases {
            let label = time.format("%H:%M:%S").to_string();
            assert_eq!(label, expected);
            assert_eq!(label.len(), 8);
            for (i, c) in label.chars().enumerate() {
                if i == 2 || i == 5 {
                    assert_eq!(c, ':');
                } else {
                    assert!(c.is_ascii_digit());
                }
            }
        }
    }

    #[test]
    fn cursor_advances_per_glyph_kind() {
        let glyphs = layout_glyphs("12:30:00");
        // from origin 120: digits advance 55, colons 20
        let expected = [
            Glyph::Digit {
                value: 1,
                x: 120.0,
                y: 60.0,
            },
            Glyph::Digit {
                value: 2,
                x: 175.0,
                y: 60.0,
            },
            Glyph::Colon { x: 230.0, y: 60.0 },
            Glyph::Digit {
                value: 3,
                x: 250.0,
                y: 60.0,
            },
            Glyph::Digit {
                value: 0,
                x: 305.0,
                y: 60.0,
            },
            Glyph::Colon { x: 360.0, y: 60.0 },
            Glyph::Digit {
                value: 0,
                x: 380.0,
                y: 60.0,
            },
            Glyph::Digit {
                value: 0,
                x: 435.0,
                y: 60.0,
            },
        ];
        assert_eq!(glyphs, expected);
    }

    #[test]
    fn draw_clears_then_strokes_pink() {
        let renderer = ClockRenderer::new(at(8, 5, 9));
        let mut recorder = Recorder::default();
        renderer.draw(&mut recorder);
        assert_eq!(recorder.ops[0], Op::Fill(BACKGROUND));
        assert_eq!(recorder.ops[1], Op::Stroke(HOT_PINK, SEGMENT_THICKNESS));
    }

    #[test]
    fn first_glyph_of_08_05_09_is_a_zero() {
        let renderer = ClockRenderer::new(at(8, 5, 9));
        let mut recorder = Recorder::default();
        renderer.draw(&mut recorder);
        // digit 0 is six strokes, middle segment off
        let expected = [
            Op::Line(120.0, 60.0, 160.0, 60.0),
            Op::Line(160.0, 60.0, 160.0, 80.0),
            Op::Line(160.0, 80.0, 160.0, 100.0),
            Op::Line(120.0, 100.0, 160.0, 100.0),
            Op::Line(120.0, 80.0, 120.0, 100.0),
            Op::Line(120.0, 60.0, 120.0, 80.0),
        ];
        assert_eq!(&recorder.ops[2..8], &expected);
    }

    #[test]
    fn colons_draw_two_fixed_radius_dots() {
        let renderer = ClockRenderer::new(at(11, 11, 11));
        let mut recorder = Recorder::default();
        renderer.draw(&mut recorder);
        let dots: Vec<&Op> = recorder
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Dot(..)))
            .collect();
        assert_eq!(
            dots,
            [
                &Op::Dot(230.0, 70.0, 1.5),
                &Op::Dot(230.0, 90.0, 1.5),
                &Op::Dot(360.0, 70.0, 1.5),
                &Op::Dot(360.0, 90.0, 1.5),
            ]
        );
    }

    #[test]
    fn non_digit_character_yields_blank_cell_but_advances() {
        let glyphs = layout_glyphs("1x2");
        assert_eq!(glyphs.len(), 3);
        assert_eq!(
            glyphs[1],
            Glyph::Digit {
                value: usize::MAX,
                x: 175.0,
                y: 60.0,
            }
        );
        assert_eq!(
            glyphs[2],
            Glyph::Digit {
                value: 2,
                x: 230.0,
                y: 60.0,
            }
        );

        // a blank cell issues no strokes at all
        let mut recorder = Recorder::default();
        draw_digit(&mut recorder, usize::MAX, 120.0, 60.0, SEGMENT_LENGTH);
        assert!(recorder.ops.is_empty());
    }

    #[test]
    fn draw_is_idempotent_on_the_framebuffer() {
        let renderer = ClockRenderer::new(at(12, 30, 0));
        let size = (ClockRenderer::WIDTH * ClockRenderer::HEIGHT * 4) as usize;

        let mut first = vec![0u8; size];
        let mut canvas = FrameCanvas::new(&mut first, ClockRenderer::WIDTH, ClockRenderer::HEIGHT);
        renderer.draw(&mut canvas);

        // second pass over a dirty frame must produce the same bits
        let mut second = first.clone();
        second[0..4].copy_from_slice(&[0x12, 0x34, 0x56, 0x78]);
        let mut canvas = FrameCanvas::new(&mut second, ClockRenderer::WIDTH, ClockRenderer::HEIGHT);
        renderer.draw(&mut canvas);

        assert_eq!(first, second);
    }
}

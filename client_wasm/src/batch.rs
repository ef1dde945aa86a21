//! Splits a recorded frame into GPU instances and overlay text

use game_core::{Color, DisplayList, DrawCmd};
use glam::Vec2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, scale_x, scale_y
    pub tint: [f32; 4],      // linear rgba
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub color: Color,
}

/// One frame, grouped by draw call
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    pub clear: Option<Color>,
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
    pub texts: Vec<TextItem>,
}

impl FrameBatch {
    pub fn from_display_list(list: &DisplayList) -> Self {
        let mut batch = Self::default();

        for cmd in &list.commands {
            match cmd {
                DrawCmd::Clear(color) => batch.clear = Some(*color),
                DrawCmd::Line { from, to, color } => {
                    // Axis-aligned lines only, one pixel thick
                    let min = from.min(*to);
                    let size = (from.max(*to) - min).max(Vec2::ONE);
                    batch.rects.push(instance(min + size * 0.5, size, *color));
                }
                DrawCmd::Rect { rect, color } => {
                    batch.rects.push(instance(rect.center(), rect.size(), *color));
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    batch
                        .circles
                        .push(instance(*center, Vec2::splat(radius * 2.0), *color));
                }
                DrawCmd::Text { text, pos, color } => batch.texts.push(TextItem {
                    text: text.clone(),
                    pos: *pos,
                    color: *color,
                }),
            }
        }

        batch
    }
}

fn instance(center: Vec2, size: Vec2, color: Color) -> InstanceData {
    InstanceData {
        transform: [center.x, center.y, size.x, size.y],
        tint: linear_rgba(color),
    }
}

/// sRGB surface formats expect linear colour values
pub fn linear_rgba(color: Color) -> [f32; 4] {
    let [r, g, b, a] = color.to_rgba();
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else if c >= 1.0 {
        1.0
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

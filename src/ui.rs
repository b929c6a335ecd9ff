//! Minimal immediate-mode widgets for the menu scenes

use macroquad::prelude::*;

use crate::sim::Rect;

const LABEL_SIZE: f32 = 28.0;

/// A clickable rectangle with a centered label
pub struct Button {
    rect: Rect,
    label: &'static str,
}

impl Button {
    pub fn new(x: f32, y: f32, w: f32, h: f32, label: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            label,
        }
    }

    /// True when the click landed on the button this frame
    pub fn clicked(&self, mouse: (f32, f32), pressed: bool) -> bool {
        pressed && self.rect.contains_point(mouse.0, mouse.1)
    }

    pub fn draw(&self) {
        let (mx, my) = mouse_position();
        let fill = if self.rect.contains_point(mx, my) {
            SKYBLUE
        } else {
            Color::new(0.35, 0.60, 0.80, 1.0)
        };
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, fill);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);

        let dims = measure_text(self.label, None, LABEL_SIZE as u16, 1.0);
        draw_text(
            self.label,
            self.rect.center_x() - dims.width / 2.0,
            self.rect.y + (self.rect.h + dims.height) / 2.0,
            LABEL_SIZE,
            BLACK,
        );
    }
}

/// Draw text centered horizontally on `cx` with its baseline at `y`
pub fn draw_text_centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}

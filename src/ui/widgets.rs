//! Basic UI widgets

use macroquad::prelude::*;

use super::MouseState;
use crate::geom::Rect;

/// Draw a filled text button, returns true if clicked
pub fn text_button(mouse: &MouseState, rect: Rect, label: &str, color: Color) -> bool {
    let hovered = mouse.inside(&rect);
    let pressed = mouse.clicking(&rect);

    let bg = if pressed {
        Color::new(color.r * 0.7, color.g * 0.7, color.b * 0.7, color.a)
    } else if hovered {
        Color::new(
            (color.r * 1.15).min(1.0),
            (color.g * 1.15).min(1.0),
            (color.b * 1.15).min(1.0),
            color.a,
        )
    } else {
        color
    };

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, BLACK);

    let font_size = 28.0;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let text_x = (rect.center_x() - dims.width * 0.5).round();
    let text_y = (rect.center_y() + dims.height * 0.5).round();
    draw_text(label, text_x, text_y, font_size, BLACK);

    mouse.clicked(&rect)
}

/// Draw a textured icon button, returns true if clicked
pub fn icon_button(mouse: &MouseState, rect: Rect, icon: &Texture2D) -> bool {
    let hovered = mouse.inside(&rect);

    if hovered {
        draw_rectangle(
            rect.x - 2.0,
            rect.y - 2.0,
            rect.w + 4.0,
            rect.h + 4.0,
            Color::from_rgba(255, 255, 255, 60),
        );
    }

    draw_texture_ex(
        icon,
        rect.x,
        rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        },
    );

    mouse.clicked(&rect)
}

/// Draw a line of text centered horizontally at the given baseline
pub fn draw_text_centered(text: &str, center_x: f32, baseline_y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (center_x - dims.width * 0.5).round(), baseline_y.round(), font_size, color);
}

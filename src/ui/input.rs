//! Mouse state for UI interaction

use crate::geom::Rect;

/// Mouse button state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Poll macroquad for the current mouse state
    pub fn poll() -> Self {
        use macroquad::prelude::*;
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is clicking inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_requires_press_inside() {
        let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
        let inside = MouseState {
            x: 20.0,
            y: 20.0,
            left_down: true,
            left_pressed: true,
        };
        let outside = MouseState {
            x: 100.0,
            y: 100.0,
            left_down: true,
            left_pressed: true,
        };
        let hover = MouseState {
            x: 20.0,
            y: 20.0,
            ..Default::default()
        };
        assert!(inside.clicked(&rect));
        assert!(!outside.clicked(&rect));
        assert!(!hover.clicked(&rect));
    }
}

use macroquad::prelude::*;

/// Horizontal slider over an inclusive integer range
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: u32,
    max: u32,
    value: u32,
    dragging: bool,
    label: String,
}

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 9.0;

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: u32, max: u32, value: u32) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
            label: label.into(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Move the knob without reporting a change (keyboard-driven updates)
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Value under horizontal position `x`, snapped to the nearest step
    pub fn value_at(&self, x: f32) -> u32 {
        let span = (self.max - self.min) as f32;
        let t = ((x - self.x) / self.width).clamp(0.0, 1.0);
        self.min + (t * span).round() as u32
    }

    /// Screen x of the knob for the current value
    fn knob_x(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        self.x + (self.value - self.min) as f32 / span * self.width
    }

    /// Whether a point is close enough to the track to grab it
    pub fn hit(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x - KNOB_RADIUS
            && pos.0 <= self.x + self.width + KNOB_RADIUS
            && (pos.1 - self.y).abs() <= KNOB_RADIUS
    }

    /// Handle interaction and return the new value if it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        if is_mouse_button_pressed(MouseButton::Left) && self.hit(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let value = self.value_at(mouse_pos.0);
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    /// Draw label, track, and knob
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 16.0, 16.0, LIGHTGRAY);

        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(70, 70, 70, 255),
        );
        let knob_x = self.knob_x();
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            knob_x - self.x,
            TRACK_HEIGHT,
            super::ACCENT,
        );

        let knob_color = if self.dragging || self.hit(mouse_pos) {
            super::ACCENT_HOVER
        } else {
            super::ACCENT
        };
        draw_circle(knob_x, self.y, KNOB_RADIUS, knob_color);
        draw_text(
            &self.value.to_string(),
            knob_x - 4.0,
            self.y + KNOB_RADIUS + 14.0,
            14.0,
            GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        Slider::new(100.0, 50.0, 180.0, "Speed", 1, 10, 2)
    }

    #[test]
    fn test_value_at_maps_track_to_range() {
        let slider = slider();
        assert_eq!(slider.value_at(100.0), 1);
        assert_eq!(slider.value_at(280.0), 10);
        assert_eq!(slider.value_at(190.0), 6);
        assert_eq!(slider.value_at(-500.0), 1);
        assert_eq!(slider.value_at(5000.0), 10);
    }

    #[test]
    fn test_initial_and_set_value_are_clamped() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, "Speed", 1, 10, 40);
        assert_eq!(slider.value(), 10);
        slider.set_value(0);
        assert_eq!(slider.value(), 1);
    }

    #[test]
    fn test_hit_area() {
        let slider = slider();
        assert!(slider.hit((100.0, 50.0)));
        assert!(slider.hit((285.0, 55.0)));
        assert!(!slider.hit((150.0, 70.0)));
    }
}

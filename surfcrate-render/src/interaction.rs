//! Pointer-drag turntable control

use std::f64::consts::FRAC_PI_2;

use crate::engine::Engine;

/// Pixels of pointer travel per radian of rotation
pub const DRAG_SENSITIVITY: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    x: f64,
    y: f64,
    yaw: f64,
    pitch: f64,
}

/// Turns pointer drags into yaw/pitch updates.
///
/// Dragging right decreases yaw, dragging down increases pitch; pitch is
/// clamped to `[-pi/2, pi/2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragRotation {
    yaw: f64,
    pitch: f64,
    drag: Option<DragStart>,
}

impl DragRotation {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self {
            yaw,
            pitch,
            drag: None,
        }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag at pointer position `(x, y)`
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag = Some(DragStart {
            x,
            y,
            yaw: self.yaw,
            pitch: self.pitch,
        });
    }

    /// Update the orientation for a pointer move. Returns the new `(yaw, pitch)`
    /// while a drag is active.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let start = self.drag?;
        self.yaw = start.yaw - (x - start.x) / DRAG_SENSITIVITY;
        self.pitch = (start.pitch + (y - start.y) / DRAG_SENSITIVITY).clamp(-FRAC_PI_2, FRAC_PI_2);
        Some((self.yaw, self.pitch))
    }

    /// End the drag
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Apply a pointer move to `engine`
    pub fn drive<T: 'static>(&mut self, engine: &Engine<T>, x: f64, y: f64) -> bool {
        match self.pointer_move(x, y) {
            Some((yaw, pitch)) => {
                engine.set_rotation(yaw, pitch);
                true
            }
            None => false,
        }
    }
}

impl Default for DragRotation {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut drag = DragRotation::default();
        assert_eq!(drag.pointer_move(10.0, 10.0), None);
        assert_eq!((drag.yaw(), drag.pitch()), (0.5, 0.5));
    }

    #[test]
    fn test_drag_updates_relative_to_start() {
        let mut drag = DragRotation::new(0.5, 0.5);
        drag.pointer_down(100.0, 100.0);

        let (yaw, pitch) = drag.pointer_move(150.0, 125.0).unwrap();
        assert_relative_eq!(yaw, -0.5);
        assert_relative_eq!(pitch, 1.0);

        // moves are measured from the press, not from the previous move
        let (yaw, pitch) = drag.pointer_move(100.0, 100.0).unwrap();
        assert_relative_eq!(yaw, 0.5);
        assert_relative_eq!(pitch, 0.5);

        drag.pointer_up();
        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer_move(0.0, 0.0), None);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut drag = DragRotation::new(0.0, 0.0);
        drag.pointer_down(0.0, 0.0);
        let (_, pitch) = drag.pointer_move(0.0, 1000.0).unwrap();
        assert_eq!(pitch, FRAC_PI_2);
        let (_, pitch) = drag.pointer_move(0.0, -1000.0).unwrap();
        assert_eq!(pitch, -FRAC_PI_2);
    }

    #[test]
    fn test_new_drag_starts_from_current_orientation() {
        let mut drag = DragRotation::new(0.0, 0.0);
        drag.pointer_down(0.0, 0.0);
        drag.pointer_move(-50.0, 0.0);
        drag.pointer_up();

        drag.pointer_down(10.0, 10.0);
        let (yaw, _) = drag.pointer_move(10.0, 10.0).unwrap();
        assert_relative_eq!(yaw, 1.0);
    }
}

//! Canvas geometry.

use serde::{Deserialize, Serialize};

/// Top-left anchor of a door footprint, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The 2-D area doors are placed within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Creates a new canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_validity() {
        assert!(Canvas::new(800.0, 600.0).is_valid());
        assert!(!Canvas::new(0.0, 600.0).is_valid());
        assert!(!Canvas::new(800.0, -1.0).is_valid());
        assert!(!Canvas::new(f64::NAN, 600.0).is_valid());
    }
}

//! Logical pixel grid geometry.

use crate::config::EngineConfig;
use crate::error::Result;

/// The engine's addressable grid: `width` x `height` logical cells, each
/// drawn as a `scale_x` x `scale_y` block of physical pixels.
///
/// Immutable once built; every field is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalGrid {
    width: i32,
    height: i32,
    scale_x: i32,
    scale_y: i32,
}

impl LogicalGrid {
    pub fn new(width: u32, height: u32, scale_x: u32, scale_y: u32) -> Result<Self> {
        Self::from_config(&EngineConfig::new(width, height, scale_x, scale_y))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        // `validate` guarantees the physical size fits in i32.
        Ok(Self {
            width: config.grid_width as i32,
            height: config.grid_height as i32,
            scale_x: config.scale_x as i32,
            scale_y: config.scale_y as i32,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn scale_x(&self) -> i32 {
        self.scale_x
    }

    pub fn scale_y(&self) -> i32 {
        self.scale_y
    }

    /// Physical width in pixels.
    pub fn real_width(&self) -> i32 {
        self.width * self.scale_x
    }

    /// Physical height in pixels.
    pub fn real_height(&self) -> i32 {
        self.height * self.scale_y
    }

    /// Whether `(x, y)` names a cell of the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn clamp_x(&self, x: i32) -> i32 {
        x.clamp(0, self.width - 1)
    }

    pub fn clamp_y(&self, y: i32) -> i32 {
        y.clamp(0, self.height - 1)
    }

    /// The logical cell under physical pixel `(px, py)`, if any.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(i32, i32)> {
        if px < 0 || py < 0 {
            return None;
        }
        let (x, y) = (px / self.scale_x, py / self.scale_y);
        self.contains(x, y).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixengError;

    #[test]
    fn physical_size() {
        let g = LogicalGrid::new(75, 50, 8, 4).unwrap();
        assert_eq!((g.real_width(), g.real_height()), (600, 200));
    }

    #[test]
    fn rejects_zero_scale() {
        assert!(matches!(
            LogicalGrid::new(10, 10, 0, 1),
            Err(PixengError::Config(_))
        ));
    }

    #[test]
    fn contains_bounds() {
        let g = LogicalGrid::new(4, 3, 1, 1).unwrap();
        assert!(g.contains(0, 0));
        assert!(g.contains(3, 2));
        assert!(!g.contains(4, 0));
        assert!(!g.contains(0, 3));
        assert!(!g.contains(-1, 0));
    }

    #[test]
    fn clamp_to_edges() {
        let g = LogicalGrid::new(10, 5, 2, 2).unwrap();
        assert_eq!(g.clamp_x(-7), 0);
        assert_eq!(g.clamp_x(42), 9);
        assert_eq!(g.clamp_y(3), 3);
        assert_eq!(g.clamp_y(5), 4);
    }

    #[test]
    fn cell_at_maps_physical_to_logical() {
        let g = LogicalGrid::new(10, 5, 8, 4).unwrap();
        assert_eq!(g.cell_at(0, 0), Some((0, 0)));
        assert_eq!(g.cell_at(15, 7), Some((1, 1)));
        assert_eq!(g.cell_at(79, 19), Some((9, 4)));
        assert_eq!(g.cell_at(80, 0), None);
        assert_eq!(g.cell_at(-1, 0), None);
    }
}

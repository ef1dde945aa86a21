use glam::Vec2;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test; rectangles that only share an edge do not collide
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::from_origin_size(Vec2::new(20.0, 250.0), Vec2::new(20.0, 100.0));
        assert_eq!(rect.left(), 20.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 250.0);
        assert_eq!(rect.bottom(), 350.0);
        assert_eq!(rect.center(), Vec2::new(30.0, 300.0));
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::from_origin_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_origin_size(Vec2::splat(5.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::from_origin_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_origin_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }
}

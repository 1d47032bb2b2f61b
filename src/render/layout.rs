//! Boxes and responsive breakpoints.

/// Axis-aligned box in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, or `None` when they don't touch.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some(Bounds::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Grow (positive) or shrink (negative) each edge independently.
    pub fn inset(&self, top: f32, right: f32, bottom: f32, left: f32) -> Bounds {
        Bounds::new(
            self.x + left,
            self.y + top,
            (self.width - left - right).max(0.0),
            (self.height - top - bottom).max(0.0),
        )
    }
}

/// Width classes: `md` from 768 px, `lg` from 1024 px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Small,
    Medium,
    Large,
}

impl Breakpoint {
    pub const MEDIUM_MIN: f32 = 768.0;
    pub const LARGE_MIN: f32 = 1024.0;

    pub fn from_width(width: f32) -> Self {
        if width >= Self::LARGE_MIN {
            Breakpoint::Large
        } else if width >= Self::MEDIUM_MIN {
            Breakpoint::Medium
        } else {
            Breakpoint::Small
        }
    }

    /// Whether the header shows the full nav instead of the menu button.
    pub fn shows_desktop_nav(self) -> bool {
        self == Breakpoint::Large
    }
}

/// Columns of the platform grid at `width`.
pub fn grid_columns(width: f32) -> usize {
    match Breakpoint::from_width(width) {
        Breakpoint::Small => 1,
        Breakpoint::Medium => 2,
        Breakpoint::Large => 3,
    }
}

/// Split `count` items into rows of `columns`, as index ranges.
pub fn grid_rows(count: usize, columns: usize) -> Vec<std::ops::Range<usize>> {
    let columns = columns.max(1);
    (0..count)
        .step_by(columns)
        .map(|start| start..(start + columns).min(count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_follow_breakpoints() {
        assert_eq!(grid_columns(375.0), 1);
        assert_eq!(grid_columns(767.9), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1023.0), 2);
        assert_eq!(grid_columns(1024.0), 3);
        assert_eq!(grid_columns(1920.0), 3);
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(6, 3), vec![0..3, 3..6]);
        assert_eq!(grid_rows(6, 4), vec![0..4, 4..6]);
        assert_eq!(grid_rows(2, 0), vec![0..1, 1..2]);
        assert!(grid_rows(0, 3).is_empty());
    }

    #[test]
    fn test_intersection() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 80.0, 100.0, 100.0);
        let i = a.intersection(&b).expect("overlap");
        assert_eq!(i, Bounds::new(50.0, 80.0, 50.0, 20.0));
        assert!(a.intersection(&Bounds::new(200.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_inset_bottom() {
        let vp = Bounds::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(vp.inset(0.0, 0.0, 50.0, 0.0), Bounds::new(0.0, 0.0, 800.0, 550.0));
    }
}

//! The stitch path: relative points plus their derived absolute positions.
//!
//! The relative sequence is authoritative and is what gets saved. The absolute
//! sequence is a cache for rendering and admission checks, derived with
//! [`absolute_from_relative`] and kept in sync on every structural change.

use crate::types::Vec2;

/// Derives absolute positions from relative points.
///
/// The first relative point is already absolute; every following one is a
/// displacement from the previous absolute position.
pub fn absolute_from_relative(relative: &[Vec2]) -> Vec<Vec2> {
    let mut absolute = Vec::with_capacity(relative.len());
    let mut current = Vec2::ZERO;
    for (i, &r) in relative.iter().enumerate() {
        if i == 0 {
            current = r;
        } else {
            current += r;
        }
        absolute.push(current);
    }
    absolute
}

/// An ordered sequence of stitches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StitchPath {
    relative: Vec<Vec2>,
    absolute: Vec<Vec2>,
}

impl StitchPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path from relative points, e.g. freshly read from a file.
    pub fn from_relative(relative: Vec<Vec2>) -> Self {
        let mut path = Self {
            relative,
            absolute: Vec::new(),
        };
        path.rebuild_absolute_from_relative();
        path
    }

    /// Relative points in stitch order.
    pub fn relative(&self) -> &[Vec2] {
        &self.relative
    }

    /// Absolute base-space positions in stitch order.
    pub fn absolute(&self) -> &[Vec2] {
        &self.absolute
    }

    /// Number of stitches.
    pub fn len(&self) -> usize {
        self.relative.len()
    }

    /// True if no stitch has been placed.
    pub fn is_empty(&self) -> bool {
        self.relative.is_empty()
    }

    /// Absolute position of the most recent stitch.
    pub fn last(&self) -> Option<Vec2> {
        self.absolute.last().copied()
    }

    /// Appends a stitch at an absolute base-space position.
    ///
    /// The first stitch is stored as-is; later ones are stored as the
    /// displacement from the previous stitch.
    pub fn append(&mut self, point: Vec2) {
        let relative = match self.last() {
            Some(last) => point - last,
            None => point,
        };
        self.relative.push(relative);
        self.absolute.push(point);
    }

    /// Removes the most recent stitch and returns its absolute position.
    ///
    /// Returns `None` when the path is already empty.
    pub fn remove_last(&mut self) -> Option<Vec2> {
        self.relative.pop()?;
        self.absolute.pop()
    }

    /// Recomputes the absolute positions from the relative points.
    pub fn rebuild_absolute_from_relative(&mut self) {
        self.absolute.clear();
        if self.relative.is_empty() {
            return;
        }
        self.absolute = absolute_from_relative(&self.relative);
    }

    /// Width and height of the axis-aligned bounding box of all stitches.
    ///
    /// Returns `None` for an empty path.
    pub fn bounding_extent(&self) -> Option<Vec2> {
        let (&first, rest) = self.absolute.split_first()?;
        let (min, max) = rest.iter().fold((first, first), |(min, max), p| {
            (
                Vec2 {
                    x: min.x.min(p.x),
                    y: min.y.min(p.y),
                },
                Vec2 {
                    x: max.x.max(p.x),
                    y: max.y.max(p.y),
                },
            )
        });
        Some(max - min)
    }

    /// Whether a stitch may be placed at `candidate`.
    ///
    /// The first stitch can go anywhere. Every later one must lie within
    /// `max_stitch_length` of the previous stitch.
    pub fn can_place(&self, candidate: Vec2, max_stitch_length: f64) -> bool {
        match self.last() {
            None => true,
            Some(last) => (candidate - last).length_sq() <= max_stitch_length * max_stitch_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::vec2;

    fn assert_invariant(path: &StitchPath) {
        assert_eq!(path.relative().len(), path.absolute().len());
        assert_eq!(path.absolute(), absolute_from_relative(path.relative()).as_slice());
        if let Some(&first) = path.relative().first() {
            assert_eq!(path.absolute()[0], first);
        }
        for i in 1..path.len() {
            assert_eq!(path.absolute()[i], path.absolute()[i - 1] + path.relative()[i]);
        }
    }

    #[test]
    fn test_first_append_is_absolute() {
        let mut path = StitchPath::new();
        path.append(vec2(4.0, -2.0));
        assert_eq!(path.relative(), &[vec2(4.0, -2.0)]);
        assert_eq!(path.absolute(), &[vec2(4.0, -2.0)]);
    }

    #[test]
    fn test_append_stores_displacement() {
        let mut path = StitchPath::new();
        path.append(vec2(0.0, 0.0));
        path.append(vec2(3.0, 0.0));
        path.append(vec2(5.0, 4.0));
        assert_eq!(path.relative(), &[vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(2.0, 4.0)]);
        assert_eq!(path.absolute(), &[vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(5.0, 4.0)]);
        assert_invariant(&path);
    }

    #[test]
    fn test_invariant_after_mixed_operations() {
        let mut path = StitchPath::new();
        let points = [vec2(1.0, 1.0), vec2(2.0, -3.0), vec2(-4.0, 0.0), vec2(7.0, 7.0)];
        for (i, &p) in points.iter().enumerate() {
            path.append(p);
            if i % 2 == 1 {
                path.remove_last();
            }
            assert_invariant(&path);
        }
        assert_eq!(path.len(), 2);
        assert_eq!(path.absolute(), &[vec2(1.0, 1.0), vec2(-4.0, 0.0)]);
    }

    #[test]
    fn test_append_then_undo_is_identity() {
        let mut path = StitchPath::new();
        path.append(vec2(1.0, 2.0));
        path.append(vec2(3.0, 3.0));
        let before = path.clone();

        path.append(vec2(9.0, -1.0));
        assert_eq!(path.remove_last(), Some(vec2(9.0, -1.0)));
        assert_eq!(path, before);
    }

    #[test]
    fn test_remove_last_on_empty_path() {
        let mut path = StitchPath::new();
        assert_eq!(path.remove_last(), None);
        assert!(path.is_empty());
    }

    #[test]
    fn test_undo_walks_back_to_empty() {
        let mut path = StitchPath::new();
        for x in 0..5 {
            path.append(vec2(f64::from(x), 0.0));
        }
        let mut removed = 0;
        while path.remove_last().is_some() {
            removed += 1;
        }
        assert_eq!(removed, 5);
        assert!(path.absolute().is_empty());
    }

    #[test]
    fn test_rebuild_replaces_stale_absolute() {
        let mut path = StitchPath::new();
        path.append(vec2(100.0, 100.0));
        path.relative = vec![vec2(1.0, 1.0), vec2(1.0, 0.0)];
        path.rebuild_absolute_from_relative();
        assert_eq!(path.absolute(), &[vec2(1.0, 1.0), vec2(2.0, 1.0)]);

        path.relative.clear();
        path.rebuild_absolute_from_relative();
        assert!(path.absolute().is_empty());
    }

    #[test]
    fn test_from_relative() {
        let path = StitchPath::from_relative(vec![vec2(1.5, -2.0), vec2(3.0, 4.25)]);
        assert_eq!(path.absolute(), &[vec2(1.5, -2.0), vec2(4.5, 2.25)]);
        assert_invariant(&path);
    }

    #[test]
    fn test_bounding_extent() {
        let mut path = StitchPath::new();
        assert_eq!(path.bounding_extent(), None);

        path.append(vec2(2.0, 2.0));
        assert_eq!(path.bounding_extent(), Some(vec2(0.0, 0.0)));

        path.append(vec2(-3.0, 6.0));
        path.append(vec2(4.0, 1.0));
        assert_eq!(path.bounding_extent(), Some(vec2(7.0, 5.0)));
    }

    #[test]
    fn test_can_place_empty_path_always() {
        let path = StitchPath::new();
        assert!(path.can_place(vec2(1e9, -1e9), 10.0));
    }

    #[test]
    fn test_can_place_uses_squared_distance() {
        let mut path = StitchPath::new();
        path.append(vec2(0.0, 0.0));
        assert!(path.can_place(vec2(6.0, 8.0), 10.0));
        assert!(path.can_place(vec2(-10.0, 0.0), 10.0));
        assert!(!path.can_place(vec2(6.0, 9.0), 10.0));
    }

    #[test]
    fn test_placement_scenario() {
        let mut path = StitchPath::new();
        for p in [vec2(0.0, 0.0), vec2(3.0, 0.0)] {
            assert!(path.can_place(p, 10.0));
            path.append(p);
        }
        assert_eq!(path.relative(), &[vec2(0.0, 0.0), vec2(3.0, 0.0)]);
        assert_eq!(path.absolute(), &[vec2(0.0, 0.0), vec2(3.0, 0.0)]);

        let before = path.clone();
        assert!(!path.can_place(vec2(20.0, 0.0), 10.0));
        assert_eq!(path, before);
    }
}

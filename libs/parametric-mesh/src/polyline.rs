//! # Polyline
//!
//! Ordered point sequence without an index buffer. Consecutive points are
//! connected when drawn as a line strip.

use glam::DVec3;

/// An ordered sequence of 3D points.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::Polyline;
/// use glam::DVec3;
///
/// let line = Polyline::from_points(vec![DVec3::ZERO, DVec3::X, DVec3::X + DVec3::Y]);
/// assert_eq!(line.segments().count(), 2);
/// assert_eq!(line.length(), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<DVec3>,
}

impl Polyline {
    /// Creates an empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polyline with room for `count` points.
    pub fn with_capacity(count: usize) -> Self {
        Self {
            points: Vec::with_capacity(count),
        }
    }

    /// Wraps an existing point list.
    pub fn from_points(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Removes all points while keeping the allocation.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Reserves room for additional points.
    pub fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
    }

    /// Appends a point.
    pub fn push(&mut self, point: DVec3) {
        self.points.push(point);
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: usize) -> DVec3 {
        self.points[index]
    }

    /// First point, if any.
    pub fn first(&self) -> Option<DVec3> {
        self.points.first().copied()
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<DVec3> {
        self.points.last().copied()
    }

    /// Iterates over consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zeros when empty.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.points.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.points[1..]
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Exports points as a flattened f32 array [x, y, z, ...].
    pub fn points_f32(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }
}

impl From<Vec<DVec3>> for Polyline {
    fn from(points: Vec<DVec3>) -> Self {
        Self::from_points(points)
    }
}

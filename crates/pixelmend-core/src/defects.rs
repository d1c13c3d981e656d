//! Defect coordinates and per-class coordinate lists

/// An integer pixel location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Hot and dead defect coordinate lists.
///
/// Order is producer-defined: the injector appends in generation order,
/// the detector in raster-scan order (row-major, left to right). No
/// uniqueness is enforced; duplicate or overlapping coordinates from the
/// injector are accepted label noise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectSet {
    /// Pixels stuck near maximum brightness
    pub hot: Vec<Coord>,
    /// Pixels stuck near minimum brightness
    pub dead: Vec<Coord>,
}

impl DefectSet {
    /// Create an empty defect set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded coordinates across both classes.
    pub fn len(&self) -> usize {
        self.hot.len() + self.dead.len()
    }

    /// True if neither class has any coordinates.
    pub fn is_empty(&self) -> bool {
        self.hot.is_empty() && self.dead.is_empty()
    }
}

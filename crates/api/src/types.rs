//! Core types shared by both algebraic domains
//!
//! [`Point`] is the group element of either domain: a finite coordinate pair
//! or the point at infinity, which is the identity of the group law. The
//! rendering contract ([`Sample`], [`PlotRange`], [`Series`], [`Label`],
//! [`PlotData`]) is what a plotting front-end consumes; it carries geometry
//! only and no styling beyond the role of each series.

use core::fmt;

/// A numeric coordinate type usable in a curve domain
pub trait Coordinate: Copy + PartialEq + fmt::Debug {
    /// Convert to the floating-point plane used for rendering
    fn to_f64(self) -> f64;
}

impl Coordinate for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Coordinate for i64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A point of an elliptic curve group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point<T> {
    /// The identity element
    Infinity,
    /// An affine point (x, y)
    Finite {
        /// Abscissa
        x: T,
        /// Ordinate
        y: T,
    },
}

impl<T: Copy> Point<T> {
    /// Create a finite point
    pub fn new(x: T, y: T) -> Self {
        Self::Finite { x, y }
    }

    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Coordinates of a finite point
    pub fn coords(&self) -> Option<(T, T)> {
        match *self {
            Self::Infinity => None,
            Self::Finite { x, y } => Some((x, y)),
        }
    }
}

impl<T: Coordinate> Point<T> {
    /// Project onto the rendering plane; `None` for the point at infinity
    pub fn to_plane(&self) -> Option<(f64, f64)> {
        self.coords().map(|(x, y)| (x.to_f64(), y.to_f64()))
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "Inf"),
            Self::Finite { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// One entry of a rendered point sequence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sample {
    /// A vertex at (x, y)
    At(f64, f64),
    /// A discontinuity: the polyline restarts after this entry
    Break,
}

impl Sample {
    /// Coordinates of a vertex
    pub fn xy(&self) -> Option<(f64, f64)> {
        match *self {
            Self::At(x, y) => Some((x, y)),
            Self::Break => None,
        }
    }

    /// Is this a sequence break?
    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }
}

impl<T: Coordinate> From<Point<T>> for Sample {
    fn from(p: Point<T>) -> Self {
        match p.to_plane() {
            Some((x, y)) => Self::At(x, y),
            None => Self::Break,
        }
    }
}

/// Axis-aligned viewport of the rendering plane
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotRange {
    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Does the closed range contain (x, y)?
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }
}

/// What a rendered series depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeriesRole {
    /// The curve itself
    Curve,
    /// The secant or tangent line through the operands
    Line,
    /// Operand markers
    Operands,
    /// The result marker
    Result,
    /// Connector between the result and its mirror image
    ResultMirror,
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeriesStyle {
    /// Connected polyline
    Lines,
    /// Isolated markers
    Points {
        /// Marker radius in pixels
        radius: u8,
    },
}

/// A rendered series
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series {
    pub role: SeriesRole,
    pub style: SeriesStyle,
    pub samples: Vec<Sample>,
}

/// A named marker placed at a point; hidden when `at` is `None`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Label {
    pub name: &'static str,
    pub at: Option<(f64, f64)>,
}

/// Everything a front-end needs to draw one view
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlotData {
    pub range: PlotRange,
    pub series: Vec<Series>,
    pub labels: Vec<Label>,
}

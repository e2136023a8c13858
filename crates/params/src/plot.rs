//! Constants for curve and line rendering

/// Number of steps across the plot width when sampling a real curve
pub const PLOT_RESOLUTION: usize = 256;

/// Margin added on each side of a real-domain plot, as a fraction of the
/// spanned extent
pub const MARGIN_FACTOR: f64 = 1.0 / 8.0;

/// Margin used when every point of interest coincides
pub const DEGENERATE_MARGIN: f64 = 5.0;

/// Decimal exponent real-domain coordinates are rounded to for display
pub const DISPLAY_ROUND_EXP: i32 = -5;

/// Largest accepted magnitude of a display rounding exponent
pub const MAX_ROUND_EXP: i32 = 300;

/// Marker radius of curve points in the modular domain
pub const CURVE_POINT_RADIUS: u8 = 3;

/// Marker radius of operand and result points
pub const MARKER_RADIUS: u8 = 5;

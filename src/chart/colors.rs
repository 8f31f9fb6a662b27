//! Color definitions for charts

use crate::report::Rgb;

/// Histogram bar fill (near white)
pub(super) const HISTOGRAM_FILL: Rgb = Rgb(0.94, 0.94, 0.94);
pub(super) const HISTOGRAM_OPACITY: f64 = 0.14;

/// Separator line between cluster bands
pub(super) const BAND_STROKE: Rgb = Rgb(1.0, 1.0, 1.0);
pub(super) const BAND_STROKE_WIDTH: f64 = 1.0;

/// Week date labels (dark gray)
pub(super) const DATE_LABEL: Rgb = Rgb(0.21, 0.21, 0.21);

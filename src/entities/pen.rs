use crate::PenKind;
use std::fmt;

/// The product manufactured by a [`PenFactory`](crate::ports::PenFactory).
///
/// Pens carry no state beyond their variant; the only thing a caller can do
/// with one is ask for its label.
pub trait Pen: fmt::Debug {
    /// Human-readable label identifying the concrete variant.
    fn label(&self) -> &'static str;
}

impl fmt::Display for dyn Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallpointPen;

impl Pen for BallpointPen {
    fn label(&self) -> &'static str {
        PenKind::Ballpoint.label()
    }
}

impl fmt::Display for BallpointPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatherPen;

impl Pen for FeatherPen {
    fn label(&self) -> &'static str {
        PenKind::Feather.label()
    }
}

impl fmt::Display for FeatherPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

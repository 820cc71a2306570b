use std::fmt;

use crate::foundation::core::{Affine, Vec2};
use crate::foundation::format::fmt_num;

/// One SVG transform function.
///
/// Angles are in degrees, matching the SVG attribute syntax.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TransformOp {
    /// `translate(x y)`
    Translate(f64, f64),
    /// `skewX(deg)`
    SkewX(f64),
    /// `skewY(deg)`
    SkewY(f64),
    /// `scale(x y)`
    Scale(f64, f64),
}

impl TransformOp {
    /// Matrix form of this single operation.
    pub fn to_affine(self) -> Affine {
        match self {
            Self::Translate(x, y) => Affine::translate(Vec2::new(x, y)),
            Self::SkewX(deg) => Affine::skew(deg.to_radians().tan(), 0.0),
            Self::SkewY(deg) => Affine::skew(0.0, deg.to_radians().tan()),
            Self::Scale(x, y) => Affine::scale_non_uniform(x, y),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate(x, y) => write!(f, "translate({} {})", fmt_num(x), fmt_num(y)),
            Self::SkewX(deg) => write!(f, "skewX({})", fmt_num(deg)),
            Self::SkewY(deg) => write!(f, "skewY({})", fmt_num(deg)),
            Self::Scale(x, y) => write!(f, "scale({} {})", fmt_num(x), fmt_num(y)),
        }
    }
}

/// Ordered transform list, applied like the SVG `transform` attribute (leftmost outermost).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Transform(pub Vec<TransformOp>);

impl Transform {
    /// Empty (identity) transform.
    pub fn identity() -> Self {
        Self(Vec::new())
    }

    /// Append an operation; it applies before the ones already present.
    pub fn then(mut self, op: TransformOp) -> Self {
        self.0.push(op);
        self
    }

    /// Combined matrix.
    pub fn to_affine(&self) -> Affine {
        self.0
            .iter()
            .fold(Affine::IDENTITY, |acc, op| acc * op.to_affine())
    }

    /// `true` when no operation is present.
    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/transform.rs"]
mod tests;

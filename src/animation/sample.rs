use std::fmt;

/// Ordered keyframe values, printed `;`-separated as SMIL `values` expect.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Keyframes(pub Vec<String>);

impl Keyframes {
    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no value is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in order.
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(";"))
    }
}

impl FromIterator<String> for Keyframes {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sample `f` at `t = i / steps` for `i in 0..=steps`.
///
/// Both endpoints are included, so the result always has `steps + 1` values. `steps == 0`
/// samples `t = 0` only.
pub fn sample_steps<F>(steps: u32, mut f: F) -> Keyframes
where
    F: FnMut(f64) -> String,
{
    if steps == 0 {
        return Keyframes(vec![f(0.0)]);
    }
    (0..=steps)
        .map(|i| f(f64::from(i) / f64::from(steps)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sample.rs"]
mod tests;

use serde::Serialize;

use crate::model::bracket::find_bracket;

/// Ordered `(x, y)` samples, kept in the order they were read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub interval: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Dataset {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    #[cfg(test)]
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (xs, ys) = points.iter().copied().unzip();
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[cfg(test)]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Marker at the query, carrying the left endpoint's y of its bracket.
    pub fn value_at_query(&self, query: f64) -> Option<Marker> {
        let interval = find_bracket(&self.xs, query)?;
        Some(Marker {
            interval,
            x: query,
            y: self.ys[interval],
        })
    }

    pub fn x_range(&self) -> Option<Range> {
        finite_range(&self.xs)
    }

    pub fn y_range(&self) -> Option<Range> {
        finite_range(&self.ys)
    }
}

fn finite_range(values: &[f64]) -> Option<Range> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some(Range { min: v, max: v }),
            Some(r) => Some(Range {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
}

impl Range {
    pub fn merge(self, other: Range) -> Range {
        Range {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn include(self, v: f64) -> Range {
        if v.is_finite() {
            self.merge(Range { min: v, max: v })
        } else {
            self
        }
    }

    /// Widens the range by `fraction` of its span on each side; a zero span
    /// is widened by one unit instead.
    pub fn padded(self, fraction: f64) -> Range {
        let span = self.max - self.min;
        if span > 0.0 {
            let pad = span * fraction;
            Range {
                min: self.min - pad,
                max: self.max + pad,
            }
        } else {
            Range {
                min: self.min - 1.0,
                max: self.max + 1.0,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/dataset.rs"]
mod tests;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Three breakpoints `(a, b, c)` with the peak at `b`
    Triangular,
    /// Four breakpoints `(a, b, c, d)` with a plateau over `[b, c]`
    Trapezoidal,
}

impl ShapeKind {
    pub fn n_breakpoints(self) -> usize {
        match self {
            Self::Triangular => 3,
            Self::Trapezoidal => 4,
        }
    }
}

/// A piecewise-linear fuzzy set: zero outside its support, one on its peak or plateau
/// and linear ramps in between.
///
/// Triangles are stored as degenerate trapezoids `(a, b, b, c)`, so a single evaluation
/// path serves both shapes. Zero-width edges act as steps: the value is one exactly on the
/// breakpoint and zero just outside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MembershipFunction {
    kind: ShapeKind,
    points: [f64; 4],
}

impl MembershipFunction {
    pub fn new(kind: ShapeKind, breakpoints: &[f64]) -> Result<Self, ConfigError> {
        if breakpoints.len() != kind.n_breakpoints() {
            return Err(ConfigError::BreakpointCount {
                shape: kind,
                expected: kind.n_breakpoints(),
                found: breakpoints.len(),
            });
        }
        if breakpoints.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteBreakpoint(breakpoints.to_vec()));
        }
        if breakpoints.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::UnsortedBreakpoints(breakpoints.to_vec()));
        }

        let points = match *breakpoints {
            [a, b, c] => [a, b, b, c],
            [a, b, c, d] => [a, b, c, d],
            _ => unreachable!("breakpoint count checked above"),
        };

        Ok(Self { kind, points })
    }

    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        Self::new(ShapeKind::Triangular, &[a, b, c])
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self, ConfigError> {
        Self::new(ShapeKind::Trapezoidal, &[a, b, c, d])
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The breakpoints as they were given, three for a triangle and four for a trapezoid.
    pub fn breakpoints(&self) -> Vec<f64> {
        let [a, b, c, d] = self.points;

        match self.kind {
            ShapeKind::Triangular => vec![a, b, d],
            ShapeKind::Trapezoidal => vec![a, b, c, d],
        }
    }

    pub fn support(&self) -> RangeInclusive<f64> {
        self.points[0]..=self.points[3]
    }

    /// Degree of membership of `x`, always within `[0, 1]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let [a, b, c, d] = self.points;

        // Also rejects NaN
        if !(a..=d).contains(&x) {
            return 0.;
        }

        if x < b {
            (x - a) / (b - a)
        } else if x <= c {
            1.
        } else {
            (d - x) / (d - c)
        }
    }

    pub fn sample(&self, universe: &[f64]) -> Vec<f64> {
        universe.iter().map(|&x| self.evaluate(x)).collect()
    }

    pub fn area(&self) -> f64 {
        let [a, b, c, d] = self.points;

        ((d - a) + (c - b)) / 2.
    }

    /// Closed-form x-coordinate of the centre of mass of the shape.
    ///
    /// Integrating `x·μ(x)` over the three linear pieces of `(a, b, c, d)` and dividing by the
    /// area collapses to `((d² + cd + c²) - (a² + ab + b²)) / (3((c + d) - (a + b)))`. A shape
    /// with no width has its mass at `a`.
    pub fn centroid(&self) -> f64 {
        let [a, b, c, d] = self.points;
        let den = 3. * ((c + d) - (a + b));

        if den == 0. {
            return a;
        }

        ((d * d + c * d + c * c) - (a * a + a * b + b * b)) / den
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_triangle() {
        let mf = MembershipFunction::triangular(-2., 0., 2.).unwrap();

        assert_eq!(mf.evaluate(-2.5), 0.);
        assert_eq!(mf.evaluate(-2.), 0.);
        assert_abs_diff_eq!(mf.evaluate(-1.5), 0.25);
        assert_eq!(mf.evaluate(0.), 1.);
        assert_abs_diff_eq!(mf.evaluate(1.), 0.5);
        assert_eq!(mf.evaluate(2.), 0.);
        assert_eq!(mf.evaluate(f64::NAN), 0.);
        assert_eq!(mf.breakpoints(), vec![-2., 0., 2.]);
    }

    #[test]
    fn test_trapezoid() {
        let mf = MembershipFunction::trapezoidal(0., 5., 10., 10.).unwrap();

        assert_eq!(mf.evaluate(-0.1), 0.);
        assert_abs_diff_eq!(mf.evaluate(2.5), 0.5);
        assert_eq!(mf.evaluate(5.), 1.);
        assert_eq!(mf.evaluate(7.5), 1.);
        assert_eq!(mf.evaluate(10.), 1.);
        assert_eq!(mf.evaluate(10.1), 0.);
        assert_eq!(mf.evaluate(1000.), 0.);
    }

    #[test]
    fn test_zero_width_edges_are_steps() {
        let left = MembershipFunction::trapezoidal(-4., -4., -2., 0.).unwrap();

        assert_eq!(left.evaluate(-4.), 1.);
        assert_eq!(left.evaluate(-4.000001), 0.);

        let spike = MembershipFunction::triangular(1., 1., 1.).unwrap();

        assert_eq!(spike.evaluate(1.), 1.);
        assert_eq!(spike.evaluate(1.0001), 0.);
        assert_eq!(spike.centroid(), 1.);
        assert_eq!(spike.area(), 0.);
    }

    #[test]
    fn test_rejects_bad_breakpoints() {
        assert_eq!(
            MembershipFunction::triangular(0., -1., 2.),
            Err(ConfigError::UnsortedBreakpoints(vec![0., -1., 2.]))
        );
        assert_eq!(
            MembershipFunction::new(ShapeKind::Trapezoidal, &[0., 1., 2.]),
            Err(ConfigError::BreakpointCount {
                shape: ShapeKind::Trapezoidal,
                expected: 4,
                found: 3,
            })
        );
        assert!(matches!(
            MembershipFunction::trapezoidal(0., 1., f64::INFINITY, f64::INFINITY),
            Err(ConfigError::NonFiniteBreakpoint(_))
        ));
    }

    #[test]
    fn test_centroid() {
        let cool = MembershipFunction::trapezoidal(-100., -100., -50., 0.).unwrap();
        let no_change = MembershipFunction::triangular(-50., 0., 50.).unwrap();
        let hot = MembershipFunction::trapezoidal(0., 50., 100., 100.).unwrap();
        let expected = (50f64.powi(2) + 50. * 100. + 100f64.powi(2)) / (3. * 150.) - 100.;

        assert_abs_diff_eq!(cool.centroid(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(no_change.centroid(), 0.);
        assert_abs_diff_eq!(hot.centroid(), -expected, epsilon = 1e-12);
        assert_abs_diff_eq!(cool.area(), 75.);
        assert_abs_diff_eq!(no_change.area(), 50.);

        let skewed = MembershipFunction::triangular(0., 1., 4.).unwrap();

        assert_abs_diff_eq!(skewed.centroid(), 5. / 3., epsilon = 1e-12);
    }
}

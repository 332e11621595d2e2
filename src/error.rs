use thiserror::Error;

use crate::membership::ShapeKind;

/// Errors raised while building membership functions, variables or controllers.
///
/// These are always reported eagerly, before any inference runs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("a {shape:?} membership function takes {expected} breakpoints, got {found}")]
    BreakpointCount {
        shape: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("membership function breakpoints must be finite, got {0:?}")]
    NonFiniteBreakpoint(Vec<f64>),

    #[error("membership function breakpoints must be non-decreasing, got {0:?}")]
    UnsortedBreakpoints(Vec<f64>),

    #[error("invalid universe {min}..={max} sampled every {step}")]
    InvalidUniverse { min: f64, max: f64, step: f64 },

    #[error("term {term} of variable `{variable}` is zero at every sample of its universe")]
    UnsampledTerm { variable: String, term: String },

    #[error("variable `{variable}` defines term {term} more than once")]
    DuplicateTerm { variable: String, term: String },
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FuzzyError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Every rule had zero firing strength so the defuzzified value is undefined.
    /// Callers pick the fallback, e.g. holding the previous output.
    #[error("no rule fired; the defuzzified output is undefined")]
    NoRuleFired,
}

pub type FuzzyResult<T> = Result<T, FuzzyError>;

use std::ops::RangeInclusive;

use fixed_map::Map as FixedMap;

use crate::error::ConfigError;
use crate::linspace::Linspace;
use crate::membership::MembershipFunction;
use crate::terms::{Term, Terms};

/// Sampling resolution used when none is given.
pub const DEFAULT_STEP: f64 = 0.1;

/// A named input or output axis partitioned into labelled fuzzy sets.
///
/// The sampled universe only serves discretised shapes (Mamdani aggregation, plotting);
/// membership degrees of crisp values are always computed in closed form.
pub struct LinguisticVariable<L: Term> {
    name: String,
    min_u: f64,
    max_u: f64,
    universe: Vec<f64>,
    terms: FixedMap<L, MembershipFunction>,
}

impl<L: Term> LinguisticVariable<L> {
    /// If the step value is not provided, it defaults to 0.1
    pub fn new(
        name: impl Into<String>,
        universe_range: RangeInclusive<f64>,
        terms: Terms<L>,
        step: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let min_u = *universe_range.start();
        let max_u = *universe_range.end();
        let step = step.unwrap_or(DEFAULT_STEP);

        let invalid = || ConfigError::InvalidUniverse {
            min: min_u,
            max: max_u,
            step,
        };

        let valid = min_u.is_finite() && max_u.is_finite() && min_u < max_u && step.is_finite() && step > 0.;
        if !valid {
            return Err(invalid());
        }

        let universe: Vec<f64> = Linspace::with_step(min_u, max_u, step).ok_or_else(invalid)?.collect();

        // A set no sample touches would vanish from every discretised aggregate
        for (label, mf) in terms.0.iter() {
            if !universe.iter().any(|&x| mf.evaluate(x) > 0.) {
                return Err(ConfigError::UnsampledTerm {
                    variable: name,
                    term: format!("{label:?}"),
                });
            }
        }

        tracing::debug!(
            variable = %name,
            terms = terms.len(),
            samples = universe.len(),
            "built linguistic variable"
        );

        Ok(Self {
            name,
            min_u,
            max_u,
            universe,
            terms: terms.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.min_u..=self.max_u
    }

    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn term(&self, label: L) -> Option<&MembershipFunction> {
        self.terms.get(label)
    }

    /// Known labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = L> + '_ {
        self.terms.keys()
    }

    /// Degree of membership of `x` in `label`. A label without a fuzzy set has no support
    /// anywhere, so it yields zero rather than an error.
    pub fn membership_of(&self, label: L, x: f64) -> f64 {
        self.term(label).map_or(0., |mf| mf.evaluate(x))
    }

    /// Membership of `x` in every known label.
    pub fn fuzzify(&self, x: f64) -> Vec<(L, f64)> {
        self.terms.iter().map(|(label, mf)| (label, mf.evaluate(x))).collect()
    }

    /// The membership curve of `label` over the sampled universe, all zeros when unknown.
    pub fn sampled(&self, label: L) -> Vec<f64> {
        match self.term(label) {
            Some(mf) => mf.sample(&self.universe),
            None => vec![0.; self.universe.len()],
        }
    }
}

use std::iter::Sum;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::math::interp;

/// Mamdani implication: caps a membership curve at a rule's firing strength.
pub fn clip<F: Float>(membership: impl IntoIterator<Item = F>, level: F) -> impl Iterator<Item = F> {
    membership.into_iter().map(move |m| F::min(m, level))
}

/// Fuzzy OR of two curves sampled over the same universe.
pub fn aggregate<F: Float>(
    u: impl IntoIterator<Item = F>,
    v: impl IntoIterator<Item = F>,
) -> impl Iterator<Item = F> {
    u.into_iter().zip(v).map(|(u, v)| F::max(u, v))
}

/// `sqrt(Σ s²)`, the combination of every rule sharing a consequence in the Sugeno engine.
pub fn root_sum_square<F: Float + Sum>(strengths: impl IntoIterator<Item = F>) -> F {
    strengths.into_iter().map(|s| s * s).sum::<F>().sqrt()
}

/// Method for defuzzificating the aggregated membership function of the Mamdani engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationOp {
    /// Discrete centroid, `Σ x·μ(x) / Σ μ(x)` over the sampled universe
    #[default]
    Centroid,
    /// Center of gravity of the piecewise-linear curve through the samples
    Cog,
    /// Value splitting the area under the curve in two halves
    Bisector,
    /// Mean of the values for which the membership function is maximum
    Mom,
    /// Smallest value for which the membership function is maximum
    Som,
    /// Largest value for which the membership function is maximum
    Lom,
}

impl DefuzzificationOp {
    /// `universe` and `membership` are parallel and the membership must not be identically
    /// zero. NaN when there is nothing to defuzzify.
    pub(crate) fn call<F: Float + Sum>(self, universe: &[F], membership: &[F]) -> F {
        if universe.is_empty() || universe.len() != membership.len() {
            return F::nan();
        }

        let two = F::one() + F::one();

        match self {
            Self::Centroid => {
                let num = universe
                    .iter()
                    .zip(membership)
                    .map(|(&u, &m)| u * m)
                    .sum::<F>();
                let den = membership.iter().copied().sum::<F>();

                num / den
            },
            Self::Cog => {
                let three = two + F::one();
                let mut num = F::zero();
                let mut den = F::zero();

                for (u, m) in universe.windows(2).zip(membership.windows(2)) {
                    let base = u[1] - u[0];
                    let area_rect = F::min(m[0], m[1]) * base;
                    let center_rect = u[0] + base / two;
                    let area_tria = base * F::abs(m[1] - m[0]) / two;
                    let center_tria = if m[1] > m[0] {
                        u[0] + two / three * base
                    } else {
                        u[0] + base / three
                    };

                    num = num + area_rect * center_rect + area_tria * center_tria;
                    den = den + area_rect + area_tria;
                }

                num / den
            },
            Self::Bisector => {
                let areas: Vec<F> = universe
                    .windows(2)
                    .zip(membership.windows(2))
                    .map(|(u, m)| (m[0] + m[1]) * (u[1] - u[0]) / two)
                    .collect();
                let target = areas.iter().copied().sum::<F>() / two;
                let mut cum_area = F::zero();

                for (i, area) in areas.iter().copied().enumerate() {
                    let prev = cum_area;
                    cum_area = cum_area + area;

                    if cum_area >= target {
                        let coords = [(prev, universe[i]), (cum_area, universe[i + 1])];

                        return interp(Some(target), &coords)[0];
                    }
                }

                universe.last().copied().unwrap_or_else(F::nan)
            },
            Self::Mom | Self::Som | Self::Lom => {
                let maximum = membership.iter().copied().fold(F::neg_infinity(), F::max);
                let at_max = universe
                    .iter()
                    .zip(membership)
                    .filter_map(|(&u, &m)| if m == maximum { Some(u) } else { None });

                match self {
                    Self::Som => at_max.fold(F::infinity(), F::min),
                    Self::Lom => at_max.fold(F::neg_infinity(), F::max),
                    _ => {
                        let (len, sum) = at_max.fold((F::zero(), F::zero()), |(n, s), u| (n + F::one(), s + u));

                        sum / len
                    },
                }
            },
        }
    }
}

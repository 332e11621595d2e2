use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};
use crate::ops::{aggregate, clip, root_sum_square, DefuzzificationOp};
use crate::outputs::{AggregatedShape, OutputAggregate, Singleton};
use crate::rules::FiringResult;
use crate::terms::Term;
use crate::variable::LinguisticVariable;

/// Selects how rule firing strengths become a crisp output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Clip, max-aggregate and defuzzify the sampled output sets
    Mamdani {
        #[serde(default)]
        defuzzification: DefuzzificationOp,
    },
    /// Root-sum-square per label, then a weighted average of the label centroids
    Sugeno,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Mamdani {
            defuzzification: DefuzzificationOp::Centroid,
        }
    }
}

/// Mamdani inference over the sampled output universe.
#[derive(Clone, Debug)]
pub struct Mamdani<O> {
    defuzz_op: DefuzzificationOp,
    universe: Vec<f64>,
    sampled: Vec<(O, Vec<f64>)>,
}

impl<O: Term> Mamdani<O> {
    pub fn new(output: &LinguisticVariable<O>, defuzz_op: DefuzzificationOp) -> Self {
        let sampled = output.labels().map(|label| (label, output.sampled(label))).collect();

        Self {
            defuzz_op,
            universe: output.universe().to_vec(),
            sampled,
        }
    }

    pub fn defuzz_op(&self) -> DefuzzificationOp {
        self.defuzz_op
    }

    pub fn infer(&self, firing: &FiringResult<O>) -> FuzzyResult<(f64, AggregatedShape<O>)> {
        let zeros = vec![0.; self.universe.len()];
        let mut membership = zeros.clone();
        let mut per_label = Vec::with_capacity(self.sampled.len());

        for (label, curve) in &self.sampled {
            let mut clipped = zeros.clone();

            for strength in firing.for_consequence(*label) {
                clipped = aggregate(clipped, clip(curve.iter().copied(), strength)).collect();
            }

            membership = aggregate(membership, clipped.iter().copied()).collect();
            per_label.push((*label, clipped));
        }

        if membership.iter().sum::<f64>() == 0. {
            return Err(FuzzyError::NoRuleFired);
        }

        let crisp = self.defuzz_op.call(&self.universe, &membership);
        let shape = AggregatedShape {
            universe: self.universe.clone(),
            per_label,
            membership,
        };

        Ok((crisp, shape))
    }
}

/// Sugeno-style inference: every output label collapses to its centroid, weighted by the
/// root-sum-square of the strengths of the rules concluding it.
#[derive(Clone, Debug)]
pub struct Sugeno<O> {
    centroids: Vec<(O, f64)>,
}

impl<O: Term> Sugeno<O> {
    pub fn new(output: &LinguisticVariable<O>) -> Self {
        let centroids = output
            .labels()
            .filter_map(|label| output.term(label).map(|mf| (label, mf.centroid())))
            .collect();

        Self { centroids }
    }

    pub fn centroid(&self, label: O) -> Option<f64> {
        self.centroids.iter().find(|(l, _)| *l == label).map(|(_, c)| *c)
    }

    pub fn infer(&self, firing: &FiringResult<O>) -> FuzzyResult<(f64, Vec<Singleton<O>>)> {
        let singletons: Vec<_> = self
            .centroids
            .iter()
            .map(|&(label, centroid)| Singleton {
                label,
                strength: root_sum_square(firing.for_consequence(label)),
                centroid,
            })
            .collect();

        let den: f64 = singletons.iter().map(|s| s.strength).sum();

        if den == 0. {
            return Err(FuzzyError::NoRuleFired);
        }

        let num: f64 = singletons.iter().map(|s| s.strength * s.centroid).sum();

        Ok((num / den, singletons))
    }

    /// Each output set clipped at its combined strength and max-aggregated. Only meant for
    /// display; the crisp value never depends on it.
    pub fn display_shape(output: &LinguisticVariable<O>, singletons: &[Singleton<O>]) -> AggregatedShape<O> {
        let universe = output.universe().to_vec();
        let mut membership = vec![0.; universe.len()];
        let mut per_label = Vec::with_capacity(singletons.len());

        for singleton in singletons {
            let clipped: Vec<f64> = clip(output.sampled(singleton.label), singleton.strength).collect();

            membership = aggregate(membership, clipped.iter().copied()).collect();
            per_label.push((singleton.label, clipped));
        }

        AggregatedShape {
            universe,
            per_label,
            membership,
        }
    }
}

/// The closed set of inference engines a controller can run.
#[derive(Clone, Debug)]
pub enum DefuzzificationStrategy<O> {
    Mamdani(Mamdani<O>),
    Sugeno(Sugeno<O>),
}

impl<O: Term> DefuzzificationStrategy<O> {
    pub fn new(strategy: Strategy, output: &LinguisticVariable<O>) -> Self {
        match strategy {
            Strategy::Mamdani { defuzzification } => Self::Mamdani(Mamdani::new(output, defuzzification)),
            Strategy::Sugeno => Self::Sugeno(Sugeno::new(output)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Mamdani(mamdani) => Strategy::Mamdani {
                defuzzification: mamdani.defuzz_op(),
            },
            Self::Sugeno(_) => Strategy::Sugeno,
        }
    }

    pub fn infer(&self, firing: &FiringResult<O>) -> FuzzyResult<(f64, OutputAggregate<O>)> {
        match self {
            Self::Mamdani(mamdani) => {
                let (crisp, shape) = mamdani.infer(firing)?;

                Ok((crisp, OutputAggregate::Clipped(shape)))
            },
            Self::Sugeno(sugeno) => {
                let (crisp, singletons) = sugeno.infer(firing)?;

                Ok((crisp, OutputAggregate::Singletons(singletons)))
            },
        }
    }
}

#[test]
fn test_power_control() {
    use approx::assert_abs_diff_eq;

    use crate::config::ControllerConfig;
    use crate::temperature::Power;

    let controller = ControllerConfig::default().build().unwrap();
    let firing = controller.fire(-1., 2.5);

    let mamdani = Mamdani::new(controller.output(), DefuzzificationOp::Centroid);
    let (power_level, shape) = mamdani.infer(&firing).unwrap();

    assert_abs_diff_eq!(power_level, -31.085677935296253, epsilon = 1e-9);
    assert_eq!(shape.universe().len(), 2001);
    assert_eq!(shape.membership().iter().copied().fold(0., f64::max), 0.5);
    assert!(shape.label(Power::H).unwrap().iter().all(|m| *m == 0.));
    assert_eq!(shape.labels().count(), 3);

    let sugeno = Sugeno::new(controller.output());
    let (power_level, singletons) = sugeno.infer(&firing).unwrap();

    assert_abs_diff_eq!(power_level, -38.74289199095097, epsilon = 1e-9);
    assert_abs_diff_eq!(sugeno.centroid(Power::C).unwrap(), -61.111111111111114, epsilon = 1e-12);
    assert_eq!(sugeno.centroid(Power::NC), Some(0.));
    assert_abs_diff_eq!(singletons[0].strength, 0.75f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(singletons[1].strength, 0.5);
    assert_eq!(singletons[2].strength, 0.);

    // Display only: each set capped at its combined strength
    let display = Sugeno::display_shape(controller.output(), &singletons);
    let cool_peak = display.label(Power::C).unwrap().iter().copied().fold(0., f64::max);

    assert_abs_diff_eq!(cool_peak, 0.75f64.sqrt(), epsilon = 1e-12);
    assert_eq!(display.membership().len(), 2001);

    let silent = controller.fire(1000., 1000.);

    assert_eq!(mamdani.infer(&silent).map(|(p, _)| p), Err(FuzzyError::NoRuleFired));
    assert_eq!(sugeno.infer(&silent).map(|(p, _)| p), Err(FuzzyError::NoRuleFired));
}

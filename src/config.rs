use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::inference::Strategy;
use crate::membership::{MembershipFunction, ShapeKind};
use crate::temperature::{rule_table, Level, Power, TemperatureController};
use crate::terms::{Term, Terms};
use crate::variable::LinguisticVariable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermConfig<L> {
    pub label: L,
    pub shape: ShapeKind,
    pub points: Vec<f64>,
}

impl<L> TermConfig<L> {
    pub fn triangle(label: L, a: f64, b: f64, c: f64) -> Self {
        Self {
            label,
            shape: ShapeKind::Triangular,
            points: vec![a, b, c],
        }
    }

    pub fn trapezoid(label: L, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            label,
            shape: ShapeKind::Trapezoidal,
            points: vec![a, b, c, d],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableConfig<L> {
    pub name: String,
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub terms: Vec<TermConfig<L>>,
}

impl<L: Term> VariableConfig<L> {
    pub fn build(&self) -> Result<LinguisticVariable<L>, ConfigError> {
        let mut terms = Terms::new();

        for term in &self.terms {
            let mf = MembershipFunction::new(term.shape, &term.points)?;

            if terms.insert(term.label, mf).is_some() {
                return Err(ConfigError::DuplicateTerm {
                    variable: self.name.clone(),
                    term: format!("{:?}", term.label),
                });
            }
        }

        LinguisticVariable::new(self.name.clone(), self.min..=self.max, terms, self.step)
    }
}

/// Everything needed to build a [`TemperatureController`]. The default reproduces the
/// reference tuning with Mamdani centroid inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    pub err: VariableConfig<Level>,
    pub err_rate: VariableConfig<Level>,
    pub output: VariableConfig<Power>,
    #[serde(default)]
    pub strategy: Strategy,
}

impl ControllerConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(&self) -> Result<TemperatureController, ConfigError> {
        Ok(TemperatureController::new(
            self.err.build()?,
            self.err_rate.build()?,
            self.output.build()?,
            rule_table(),
            self.strategy,
        ))
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            err: VariableConfig {
                name: "err".into(),
                min: -4.,
                max: 4.,
                step: None,
                terms: vec![
                    TermConfig::trapezoid(Level::N, -4., -4., -2., 0.),
                    TermConfig::triangle(Level::Z, -2., 0., 2.),
                    TermConfig::trapezoid(Level::P, 0., 2., 4., 4.),
                ],
            },
            err_rate: VariableConfig {
                name: "err_rate".into(),
                min: -10.,
                max: 10.,
                step: None,
                terms: vec![
                    TermConfig::trapezoid(Level::N, -10., -10., -5., 0.),
                    TermConfig::triangle(Level::Z, -5., 0., 5.),
                    TermConfig::trapezoid(Level::P, 0., 5., 10., 10.),
                ],
            },
            output: VariableConfig {
                name: "power".into(),
                min: -100.,
                max: 100.,
                step: None,
                terms: vec![
                    TermConfig::trapezoid(Power::C, -100., -100., -50., 0.),
                    TermConfig::triangle(Power::NC, -50., 0., 50.),
                    TermConfig::trapezoid(Power::H, 0., 50., 100., 100.),
                ],
            },
            strategy: Strategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::DefuzzificationOp;

    #[test]
    fn test_default_builds() {
        let controller = ControllerConfig::default().build().unwrap();

        assert_eq!(controller.first().name(), "err");
        assert_eq!(controller.second().range(), -10. ..=10.);
        assert_eq!(controller.output().universe().len(), 2001);
        assert_eq!(controller.rules().len(), 9);
        assert_eq!(controller.strategy().strategy(), Strategy::default());
        assert_eq!(
            controller.output().labels().collect::<Vec<_>>(),
            vec![Power::C, Power::NC, Power::H]
        );
    }

    #[test]
    fn test_rejects_unsorted_breakpoints() {
        let mut config = ControllerConfig::default();
        config.err.terms[1] = TermConfig::triangle(Level::Z, 2., 0., -2.);

        assert!(matches!(config.build(), Err(ConfigError::UnsortedBreakpoints(_))));
    }

    #[test]
    fn test_rejects_wrong_breakpoint_count() {
        let mut config = ControllerConfig::default();
        config.output.terms[0].points.pop();

        assert!(matches!(
            config.build(),
            Err(ConfigError::BreakpointCount {
                shape: ShapeKind::Trapezoidal,
                expected: 4,
                found: 3,
            })
        ));
    }

    #[test]
    fn test_rejects_duplicate_terms() {
        let mut config = ControllerConfig::default();
        config.err_rate.terms[2].label = Level::N;

        let Err(err) = config.build() else {
            panic!("duplicate term accepted");
        };

        assert_eq!(
            err,
            ConfigError::DuplicateTerm {
                variable: "err_rate".into(),
                term: "N".into(),
            }
        );
    }

    #[test]
    fn test_rejects_bad_universe() {
        let mut config = ControllerConfig::default();
        config.output.step = Some(-0.1);

        assert!(matches!(config.build(), Err(ConfigError::InvalidUniverse { .. })));

        for step in [1e-320, 1e-12, 500.] {
            config.output.step = Some(step);

            assert!(
                matches!(config.build(), Err(ConfigError::InvalidUniverse { .. })),
                "step {step} accepted"
            );
        }
    }

    #[test]
    fn test_rejects_output_term_between_samples() {
        let mut config = ControllerConfig::default();
        config.output.terms[1] = TermConfig::triangle(Power::NC, 0.01, 0.02, 0.03);

        let Err(err) = config.build() else {
            panic!("unsampled output term accepted");
        };

        assert_eq!(
            err,
            ConfigError::UnsampledTerm {
                variable: "power".into(),
                term: "NC".into(),
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = ControllerConfig::default().with_strategy(Strategy::Mamdani {
            defuzzification: DefuzzificationOp::Bisector,
        });
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains(r#""shape":"trapezoidal""#));
        assert!(json.contains(r#""label":"NC""#));
        assert!(json.contains(r#""strategy":{"kind":"mamdani","defuzzification":"bisector"}"#));
        assert_eq!(serde_json::from_str::<ControllerConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_json_defaults() {
        let mut json = serde_json::to_value(ControllerConfig::default()).unwrap();
        json.as_object_mut().unwrap().remove("strategy");

        let config: ControllerConfig = serde_json::from_value(json).unwrap();

        assert_eq!(config.strategy, Strategy::default());

        let sugeno: Strategy = serde_json::from_str(r#"{"kind":"sugeno"}"#).unwrap();
        let mamdani: Strategy = serde_json::from_str(r#"{"kind":"mamdani"}"#).unwrap();

        assert_eq!(sugeno, Strategy::Sugeno);
        assert_eq!(mamdani, Strategy::default());
    }
}

//! Fuzzy inference core for closed-loop power control.
//!
//! Two crisp inputs, a temperature error and its rate of change, are fuzzified against
//! labelled membership functions, combined through a 3×3 rule table and defuzzified
//! into a power adjustment percentage. Two inference engines are available:
//!
//! - **Mamdani**: clip every rule's output set at its firing strength, max-aggregate,
//!   then take the centroid of the sampled aggregate.
//! - **Sugeno**: combine the strengths of rules sharing an output label by root-sum-square
//!   and take the weighted average of each label's closed-form centroid.
//!
//! ```
//! use fuzzy_power_control::{ControllerConfig, FuzzyError, Strategy};
//!
//! let controller = ControllerConfig::default().build()?;
//! let cooling = controller.infer(-1.5, 2.0)?;
//!
//! assert!(cooling.power_level() < 0.);
//!
//! let sugeno = ControllerConfig::default().with_strategy(Strategy::Sugeno).build()?;
//!
//! assert_eq!(sugeno.infer(1000., 1000.), Err(FuzzyError::NoRuleFired));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod controller;
mod error;
mod inference;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod temperature;
mod terms;
mod variable;

pub use config::{ControllerConfig, TermConfig, VariableConfig};
pub use controller::Controller;
pub use error::{ConfigError, FuzzyError, FuzzyResult};
pub use inference::{DefuzzificationStrategy, Mamdani, Strategy, Sugeno};
pub use linspace::MAX_SAMPLES;
pub use membership::{MembershipFunction, ShapeKind};
pub use ops::{aggregate, clip, root_sum_square, DefuzzificationOp};
pub use outputs::{AggregatedShape, OutputAggregate, Outputs, Singleton};
pub use rules::{FiringResult, Rule, Rules};
pub use temperature::{rule_table, Level, Power, TemperatureController};
pub use terms::{Key, Term, Terms};
pub use variable::{LinguisticVariable, DEFAULT_STEP};

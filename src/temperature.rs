//! Labels and rule table of the temperature power controller.
//!
//! Both inputs, the temperature error and its rate of change, are split into
//! Negative / Zero / Positive. The output power adjustment is split into
//! Cool / No change / Heat.

use fixed_map::Key;
use serde::{Deserialize, Serialize};

use crate::controller::Controller;
use crate::rules::Rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Key, Serialize, Deserialize)]
pub enum Level {
    N,
    Z,
    P,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Key, Serialize, Deserialize)]
pub enum Power {
    /// Cool, decrease power
    C,
    /// No change
    NC,
    /// Heat, increase power
    H,
}

pub type TemperatureController = Controller<Level, Level, Power>;

/// | err \ err rate | N | Z  | P |
/// |----------------|---|----|---|
/// | N              | C | C  | C |
/// | Z              | H | NC | C |
/// | P              | H | H  | H |
pub fn rule_table() -> Rules<Level, Level, Power> {
    use Level::*;

    let mut rules = Rules::with_capacity(9);

    rules.add(N, N, Power::C);
    rules.add(Z, N, Power::H);
    rules.add(P, N, Power::H);
    rules.add(N, Z, Power::C);
    rules.add(Z, Z, Power::NC);
    rules.add(P, Z, Power::H);
    rules.add(N, P, Power::C);
    rules.add(Z, P, Power::C);
    rules.add(P, P, Power::H);

    rules
}

#[test]
fn test_rule_table() {
    let rules = rule_table();
    let count = |power| rules.iter().filter(|rule| rule.consequence == power).count();

    assert_eq!(rules.len(), 9);
    assert_eq!(count(Power::C), 4);
    assert_eq!(count(Power::NC), 1);
    assert_eq!(count(Power::H), 4);

    // Every (err, err rate) pair appears exactly once
    for err in [Level::N, Level::Z, Level::P] {
        for rate in [Level::N, Level::Z, Level::P] {
            assert_eq!(rules.iter().filter(|rule| rule.premise == (err, rate)).count(), 1);
        }
    }
}

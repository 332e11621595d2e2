use crate::terms::Term;
use crate::variable::LinguisticVariable;

/// `IF first IS premise.0 AND second IS premise.1 THEN output IS consequence`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule<A, B, O> {
    pub premise: (A, B),
    pub consequence: O,
}

/// An ordered rule base over two input variables and one output variable.
///
/// Several rules may share a consequence; the inference engines aggregate across all of them.
#[derive(Clone, Debug, Default)]
pub struct Rules<A, B, O>(pub(crate) Vec<Rule<A, B, O>>);

impl<A: Term, B: Term, O: Term> Rules<A, B, O> {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, first: A, second: B, consequence: O) {
        self.0.push(Rule {
            premise: (first, second),
            consequence,
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<A, B, O>> {
        self.0.iter()
    }

    /// Firing strength of every rule: the fuzzy AND (minimum) of both antecedent degrees.
    pub fn fire(
        &self,
        first: &LinguisticVariable<A>,
        x1: f64,
        second: &LinguisticVariable<B>,
        x2: f64,
    ) -> FiringResult<O> {
        let strengths = self
            .0
            .iter()
            .map(|rule| {
                let (a, b) = rule.premise;
                let strength = f64::min(first.membership_of(a, x1), second.membership_of(b, x2));

                (rule.consequence, strength)
            })
            .collect();

        FiringResult { strengths }
    }
}

/// Per-rule firing strengths of one inference call, indexed like the rule base.
#[derive(Clone, Debug, PartialEq)]
pub struct FiringResult<O> {
    strengths: Vec<(O, f64)>,
}

impl<O: Term> FiringResult<O> {
    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    pub fn strength(&self, rule: usize) -> Option<f64> {
        self.strengths.get(rule).map(|(_, strength)| *strength)
    }

    /// `(rule index, consequence, strength)` triples in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, O, f64)> + '_ {
        self.strengths
            .iter()
            .enumerate()
            .map(|(i, (consequence, strength))| (i, *consequence, *strength))
    }

    /// Strengths of the rules concluding `label`.
    pub fn for_consequence(&self, label: O) -> impl Iterator<Item = f64> + '_ {
        self.strengths
            .iter()
            .filter(move |(consequence, _)| *consequence == label)
            .map(|(_, strength)| *strength)
    }

    pub fn any_fired(&self) -> bool {
        self.strengths.iter().any(|(_, strength)| *strength > 0.)
    }
}

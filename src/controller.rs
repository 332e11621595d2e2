use crate::error::FuzzyResult;
use crate::inference::{DefuzzificationStrategy, Strategy};
use crate::outputs::Outputs;
use crate::rules::{FiringResult, Rules};
use crate::terms::Term;
use crate::variable::LinguisticVariable;

/// A two-input, one-output fuzzy controller.
///
/// Built once and never mutated afterwards: inference is a pure function of its inputs, so
/// a single controller can be shared by reference across threads.
pub struct Controller<A: Term, B: Term, O: Term> {
    first: LinguisticVariable<A>,
    second: LinguisticVariable<B>,
    output: LinguisticVariable<O>,
    rules: Rules<A, B, O>,
    strategy: DefuzzificationStrategy<O>,
}

impl<A: Term, B: Term, O: Term> Controller<A, B, O> {
    pub fn new(
        first: LinguisticVariable<A>,
        second: LinguisticVariable<B>,
        output: LinguisticVariable<O>,
        rules: Rules<A, B, O>,
        strategy: Strategy,
    ) -> Self {
        let strategy = DefuzzificationStrategy::new(strategy, &output);

        tracing::debug!(
            first = first.name(),
            second = second.name(),
            output = output.name(),
            rules = rules.len(),
            strategy = ?strategy.strategy(),
            "built fuzzy controller"
        );

        Self {
            first,
            second,
            output,
            rules,
            strategy,
        }
    }

    /// The same variables and rules driven by another inference engine.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self::new(self.first, self.second, self.output, self.rules, strategy)
    }

    pub fn first(&self) -> &LinguisticVariable<A> {
        &self.first
    }

    pub fn second(&self) -> &LinguisticVariable<B> {
        &self.second
    }

    pub fn output(&self) -> &LinguisticVariable<O> {
        &self.output
    }

    pub fn rules(&self) -> &Rules<A, B, O> {
        &self.rules
    }

    pub fn strategy(&self) -> &DefuzzificationStrategy<O> {
        &self.strategy
    }

    pub fn fire(&self, x1: f64, x2: f64) -> FiringResult<O> {
        self.rules.fire(&self.first, x1, &self.second, x2)
    }

    /// Crisp output for one pair of crisp inputs. Inputs outside the variables' universes are
    /// accepted and simply lose membership; when nothing fires at all the error is
    /// [`NoRuleFired`](crate::FuzzyError::NoRuleFired) and the caller chooses a fallback.
    pub fn infer(&self, x1: f64, x2: f64) -> FuzzyResult<Outputs<O>> {
        let firing = self.fire(x1, x2);

        tracing::trace!(x1, x2, ?firing, "fired rules");

        match self.strategy.infer(&firing) {
            Ok((power_level, aggregate)) => {
                tracing::debug!(x1, x2, power_level, "inferred output");

                Ok(Outputs::new(power_level, firing, aggregate))
            },
            Err(err) => {
                tracing::debug!(x1, x2, %err, "inference failed");

                Err(err)
            },
        }
    }
}

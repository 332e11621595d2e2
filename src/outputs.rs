use crate::rules::FiringResult;

/// Discretised result of Mamdani clipping and aggregation, ready for plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedShape<O> {
    pub(crate) universe: Vec<f64>,
    pub(crate) per_label: Vec<(O, Vec<f64>)>,
    pub(crate) membership: Vec<f64>,
}

impl<O: Copy + PartialEq> AggregatedShape<O> {
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    /// The max-aggregate over every label, sampled like [`Self::universe`].
    pub fn membership(&self) -> &[f64] {
        &self.membership
    }

    /// Clipped-and-aggregated curve of a single output label.
    pub fn label(&self, label: O) -> Option<&[f64]> {
        self.per_label
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, curve)| curve.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = (O, &[f64])> {
        self.per_label.iter().map(|(l, curve)| (*l, curve.as_slice()))
    }
}

/// Combined strength of one output label and the representative value it pulls towards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Singleton<O> {
    pub label: O,
    pub strength: f64,
    pub centroid: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OutputAggregate<O> {
    Clipped(AggregatedShape<O>),
    Singletons(Vec<Singleton<O>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outputs<O> {
    power_level: f64,
    firing: FiringResult<O>,
    aggregate: OutputAggregate<O>,
}

impl<O> Outputs<O> {
    pub(crate) fn new(power_level: f64, firing: FiringResult<O>, aggregate: OutputAggregate<O>) -> Self {
        Self {
            power_level,
            firing,
            aggregate,
        }
    }

    /// The defuzzified crisp output.
    pub fn power_level(&self) -> f64 {
        self.power_level
    }

    pub fn firing(&self) -> &FiringResult<O> {
        &self.firing
    }

    pub fn aggregate(&self) -> &OutputAggregate<O> {
        &self.aggregate
    }

    pub fn shape(&self) -> Option<&AggregatedShape<O>> {
        match &self.aggregate {
            OutputAggregate::Clipped(shape) => Some(shape),
            OutputAggregate::Singletons(_) => None,
        }
    }

    pub fn singletons(&self) -> Option<&[Singleton<O>]> {
        match &self.aggregate {
            OutputAggregate::Clipped(_) => None,
            OutputAggregate::Singletons(singletons) => Some(singletons),
        }
    }
}

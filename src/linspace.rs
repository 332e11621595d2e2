/// Upper bound on the number of samples in a universe.
pub const MAX_SAMPLES: usize = 1_000_000;

/// `n` evenly spaced samples over `[min, max]`, endpoints included, like `numpy.linspace`.
pub(crate) struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub(crate) fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 { (max - min) / (n - 1) as f64 } else { 0. };

        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }

    /// Samples `[min, max]` every `step`. The count is `floor((max - min) / step) + 1`, so a
    /// step that does not divide the range evenly is stretched slightly to land on `max`.
    /// `None` when the range holds fewer than two samples or more than [`MAX_SAMPLES`].
    pub(crate) fn with_step(min: f64, max: f64, step: f64) -> Option<Self> {
        // Absorbs representation error such as 200. / 0.1 == 1999.9999999999998
        let steps = ((max - min) / step + 1e-9).floor();

        if !steps.is_finite() || steps < 1. || steps >= MAX_SAMPLES as f64 {
            return None;
        }

        let num = (steps as usize).checked_add(1)?;

        Some(Self::new(min, max, num))
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    let xs: Vec<_> = Linspace::new(-1., 1., 5).collect();

    assert_eq!(xs, vec![-1., -0.5, 0., 0.5, 1.]);

    let universe: Vec<_> = Linspace::with_step(-100., 100., 0.1).unwrap().collect();

    assert_eq!(universe.len(), 2001);
    assert_eq!(universe[0], -100.);
    assert_eq!(universe[1000], 0.);
    assert_eq!(universe[2000], 100.);

    assert_eq!(Linspace::with_step(-4., 4., 0.1).unwrap().len(), 81);
    assert_eq!(Linspace::new(3., 7., 1).collect::<Vec<_>>(), vec![3.]);
}

#[test]
fn test_with_step_rejects_unusable_counts() {
    // Subnormal step: the quotient overflows to infinity
    assert!(Linspace::with_step(-100., 100., 1e-320).is_none());
    // Finite but far too many samples to allocate
    assert!(Linspace::with_step(-100., 100., 1e-12).is_none());
    // Step wider than the range leaves a single sample
    assert!(Linspace::with_step(0., 1., 2.).is_none());

    assert_eq!(Linspace::with_step(0., 1., 1.).unwrap().len(), 2);
    assert_eq!(Linspace::with_step(0., 1., 1. / (MAX_SAMPLES - 1) as f64).unwrap().len(), MAX_SAMPLES);
}

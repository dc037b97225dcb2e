use std::f64::consts::TAU;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the small offsets applied to every generated vertex.
///
/// Each call returns one offset, in unit circle space, for a circle split into
/// `divisions` sectors. The generator asks for x first then y.
pub trait Perturbation {
    fn sample(&mut self, divisions: usize) -> f64;
}

impl<P: Perturbation + ?Sized> Perturbation for &mut P {
    fn sample(&mut self, divisions: usize) -> f64 {
        (**self).sample(divisions)
    }
}

impl<P: Perturbation + ?Sized> Perturbation for Box<P> {
    fn sample(&mut self, divisions: usize) -> f64 {
        (**self).sample(divisions)
    }
}

/// Always zero, gives perfectly symmetric outlines
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPerturbation;

impl Perturbation for NoPerturbation {
    fn sample(&mut self, _divisions: usize) -> f64 {
        0.
    }
}

/// Replays a fixed sequence, wrapping around at the end.
/// An empty sequence behaves like [`NoPerturbation`].
#[derive(Debug, Default, Clone)]
pub struct FixedPerturbation {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedPerturbation {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl Perturbation for FixedPerturbation {
    fn sample(&mut self, _divisions: usize) -> f64 {
        if self.values.is_empty() {
            return 0.;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Uniform noise in `[-PI / 2 / divisions, PI / 2 / divisions)`, so finer
/// splits get smaller offsets.
#[derive(Debug, Clone)]
pub struct RandomPerturbation<R> {
    rng: R,
}

impl<R: Rng> RandomPerturbation<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPerturbation<StdRng> {
    /// Reproducible noise
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Perturbation for RandomPerturbation<R> {
    fn sample(&mut self, divisions: usize) -> f64 {
        (self.rng.gen::<f64>() - 0.5) * TAU / divisions as f64 * 0.5
    }
}

//! Noisy temperature and strain signals sampled over a shared time axis.
//!
//! Temperature is `sin(t)` and strain is `cos(t) - 0.2 t`, each with
//! independent Gaussian noise of standard deviation 0.1 added per sample.

use rand::Rng;
use rand_distr::{Distribution as _, StandardNormal};

use crate::grid::linspace;

/// Number of samples on the time axis.
pub const SAMPLE_COUNT: usize = 101;
/// Start of the time domain, in seconds.
pub const TIME_START: f64 = 0.0;
/// End of the time domain, in seconds (inclusive).
pub const TIME_END: f64 = 10.0;
/// Standard deviation of the additive noise on both signals.
pub const NOISE_SCALE: f64 = 0.1;
/// Linear downward drift of the strain signal per second.
pub const STRAIN_DRIFT: f64 = 0.2;

/// Paired `(time, temperature, strain)` samples.
///
/// The three vectors always have the same length.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub time: Vec<f64>,
    pub temperature: Vec<f64>,
    pub strain: Vec<f64>,
}

impl TimeSeries {
    /// Samples both signals over the fixed domain, drawing noise from `rng`.
    ///
    /// All temperature noise is drawn before any strain noise.
    pub fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let time = linspace(TIME_START, TIME_END, SAMPLE_COUNT);
        let temperature = time
            .iter()
            .map(|&t| t.sin() + NOISE_SCALE * noise(rng))
            .collect();
        let strain = time
            .iter()
            .map(|&t| t.cos() - STRAIN_DRIFT * t + NOISE_SCALE * noise(rng))
            .collect();
        Self {
            time,
            temperature,
            strain,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(time, temperature)` pairs in time order.
    pub fn temperature_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.temperature.iter().copied())
    }

    /// `(time, strain)` pairs in time order.
    pub fn strain_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.strain.iter().copied())
    }
}

fn noise<R>(rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    StandardNormal.sample(rng)
}

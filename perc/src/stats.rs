use log::{debug, trace};
use rand::{
    distributions::{Bernoulli, Uniform},
    prelude::Distribution,
    rngs::StdRng,
    Rng, SeedableRng,
};
use rayon::prelude::*;

use crate::{
    error::{ensure_positive, Error, Result},
    grid::Percolation,
};

////////////////////////////////////////////////////////////////////////////////

/// z-score of the two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Opens uniformly random sites of a fresh `n`-by-`n` grid until it
/// percolates and returns the grid.
pub fn fill<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Percolation> {
    let mut grid = Percolation::new(n)?;
    let coord = Uniform::new_inclusive(1, n);
    while !grid.percolates() {
        let row = coord.sample(rng);
        let col = coord.sample(rng);
        grid.open(row, col)?;
    }
    Ok(grid)
}

/// Runs a single trial and returns the fraction of sites open at the moment
/// the grid first percolated.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    Ok(fill(n, rng)?.open_fraction())
}

////////////////////////////////////////////////////////////////////////////////

/// Percolation threshold samples of repeated independent trials.
///
/// The standard deviation is the population one, and the confidence interval
/// is `mean ∓ 1.96 * stddev / sqrt(trials)`. A single trial therefore yields a
/// zero deviation and an interval collapsed onto the mean.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    samples: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` trials on `n`-by-`n` grids one after another.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n` or `trials` is zero.
    pub fn run<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        ensure_positive("n", n)?;
        ensure_positive("trials", trials)?;
        debug!("running {trials} trials on a {n}x{n} grid");

        let mut samples = vec![0.0; trials];
        for (i, slot) in samples.iter_mut().enumerate() {
            *slot = run_trial(n, rng)?;
            trace!("trial {i}: threshold {slot}");
        }

        let stats = Self { n, samples };
        debug!("done, mean threshold {}", stats.mean());
        Ok(stats)
    }

    /// Same as [`run`](Self::run), but spreads trials over the rayon pool.
    ///
    /// Every trial gets its own generator seeded from `rng` before any trial
    /// starts, so the result depends on `rng` only and not on scheduling.
    pub fn run_parallel<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        ensure_positive("n", n)?;
        ensure_positive("trials", trials)?;
        debug!("running {trials} trials on a {n}x{n} grid in parallel");

        let seeds: Vec<u64> = (0..trials).map(|_| rng.gen()).collect();
        let mut samples = vec![0.0; trials];
        samples
            .par_iter_mut()
            .zip(seeds.par_iter())
            .enumerate()
            .try_for_each(|(i, (slot, &seed))| -> Result<()> {
                *slot = run_trial(n, &mut StdRng::seed_from_u64(seed))?;
                trace!("trial {i}: threshold {slot}");
                Ok(())
            })?;

        let stats = Self { n, samples };
        debug!("done, mean threshold {}", stats.mean());
        Ok(stats)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn trial_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.trial_count() as f64
    }

    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / self.trial_count() as f64;
        variance.sqrt()
    }

    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trial_count() as f64).sqrt()
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Returns an estimate of the probability that a random `n`-by-`n` grid, where
/// every site is blocked with probability `vacancy`, percolates.
pub fn estimate_probability<R: Rng + ?Sized>(
    n: usize,
    vacancy: f64,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    ensure_positive("n", n)?;
    ensure_positive("trials", trials)?;
    if !(0.0..=1.0).contains(&vacancy) {
        return Err(Error::InvalidProbability(vacancy));
    }
    let d = Bernoulli::new(1.0 - vacancy).map_err(|_| Error::InvalidProbability(vacancy))?;

    let mut perc_count = 0;
    for _ in 0..trials {
        let mut grid = Percolation::new(n)?;
        for row in 1..=n {
            for col in 1..=n {
                if d.sample(rng) {
                    grid.open(row, col)?;
                }
            }
        }
        if grid.percolates() {
            perc_count += 1;
        }
    }
    Ok(perc_count as f64 / trials as f64)
}

////////////////////////////////////////////////////////////////////////////////

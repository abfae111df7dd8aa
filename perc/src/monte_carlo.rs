use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{stats, Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

/// How a trial picks the next site to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Draw row and column uniformly, skip the draw if the site is open.
    #[default]
    Resample,
    /// Shuffle all sites once and open them in that order.
    Shuffle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    pub size: usize,
    pub trials: usize,
    /// Base seed. Trial `i` uses a generator seeded with `seed + i`,
    /// so results do not depend on `parallel`.
    pub seed: Option<u64>,
    pub sampling: Sampling,
    pub parallel: bool,
}

impl TrialConfig {
    pub fn new(size: usize, trials: usize) -> Self {
        Self {
            size,
            trials,
            seed: None,
            sampling: Sampling::default(),
            parallel: false,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// Number of open sites when the grid first percolated.
    pub open_sites: usize,
    /// `open_sites` as a fraction of all sites.
    pub threshold: f64,
}

/// Opens random sites of a fresh `size`-by-`size` grid until it percolates.
pub fn run_trial<R: Rng>(size: usize, sampling: Sampling, rng: &mut R) -> Result<Trial> {
    let mut grid = Percolation::new(size)?;

    match sampling {
        Sampling::Resample => {
            while !grid.percolates() {
                let row = rng.gen_range(1..=size);
                let col = rng.gen_range(1..=size);
                if !grid.is_open(row, col)? {
                    grid.open(row, col)?;
                }
            }
        }
        Sampling::Shuffle => {
            let mut sites = (1..=size)
                .flat_map(|row| (1..=size).map(move |col| (row, col)))
                .collect::<Vec<_>>();
            sites.shuffle(rng);
            for (row, col) in sites {
                if grid.percolates() {
                    break;
                }
                grid.open(row, col)?;
            }
        }
    }

    let open_sites = grid.number_of_open_sites();
    Ok(Trial {
        open_sites,
        threshold: open_sites as f64 / (size * size) as f64,
    })
}

////////////////////////////////////////////////////////////////////////////////

/// Results of a series of independent percolation trials.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Runs `trials` sequential trials on a `size`-by-`size` grid with an
    /// entropy-seeded generator.
    pub fn new(size: usize, trials: usize) -> Result<Self> {
        Self::with_config(&TrialConfig::new(size, trials))
    }

    pub fn with_config(config: &TrialConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(Error::InvalidSize);
        }
        if config.trials == 0 {
            return Err(Error::InvalidTrials);
        }

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!(
            "Running {} trials on a {}x{} grid (seed {seed}, {:?})",
            config.trials, config.size, config.size, config.sampling
        );

        let trial = |index: usize| -> Result<f64> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let trial = run_trial(config.size, config.sampling, &mut rng)?;
            debug!(
                "Trial {index}: percolated with {} open sites, threshold {}",
                trial.open_sites, trial.threshold
            );
            Ok(trial.threshold)
        };

        let thresholds = if config.parallel {
            (0..config.trials)
                .into_par_iter()
                .map(trial)
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..config.trials).map(trial).collect::<Result<Vec<_>>>()?
        };

        let mean = stats::mean(&thresholds);
        let stddev = stats::sample_stddev(&thresholds);
        info!("Finished: mean {mean}, stddev {stddev}");

        Ok(Self {
            size: config.size,
            thresholds,
            mean,
            stddev,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Thresholds in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - stats::confidence_radius(self.stddev, self.trials())
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + stats::confidence_radius(self.stddev, self.trials())
    }
}

//! src/budget.rs
//!
//! Iteratie- en tijdsbudget voor één run. Vervangt een globale stopwatch:
//! elke run maakt zijn eigen `Budget` en geeft het door aan de buitenste
//! lus. Het budget wordt alleen tussen iteraties geraadpleegd en onderbreekt
//! nooit een lopende operatie.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Budget {
    iteration_limit: usize,
    time_limit: Option<Duration>,
    start_time: Instant,
}

impl Budget {
    pub fn new(iteration_limit: usize, time_limit: Option<Duration>) -> Self {
        Self {
            iteration_limit,
            time_limit,
            start_time: Instant::now(),
        }
    }

    /// Geen iteratie- of tijdslimiet.
    pub fn unlimited() -> Self {
        Self::new(usize::MAX, None)
    }

    /// `seconds <= 0` (of niet eindig) betekent: geen tijdslimiet.
    pub fn with_seconds(iteration_limit: usize, seconds: f64) -> Self {
        let time_limit = (seconds.is_finite() && seconds > 0.0).then(|| Duration::from_secs_f64(seconds));
        Self::new(iteration_limit, time_limit)
    }

    /// Zet de klok (opnieuw) op nul, bv. vlak voor de eerste iteratie.
    pub fn start(&mut self) {
        self.start_time = Instant::now();
    }

    #[inline]
    pub fn iteration_limit(&self) -> usize {
        self.iteration_limit
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn time_exceeded(&self) -> bool {
        self.time_limit.is_some_and(|limit| self.elapsed() > limit)
    }

    /// `true` als de iteratielimiet bereikt is of de tijd op is.
    pub fn is_exhausted(&self, iterations_done: usize) -> bool {
        iterations_done >= self.iteration_limit || self.time_exceeded()
    }
}

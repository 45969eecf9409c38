use std::time::{Duration, Instant};

use log::info;

/// Accumulates wall-clock time per named phase. Each `mark` charges the time since the previous
/// mark to the given label.
#[derive(Debug)]
pub struct Timer {
    last: Instant,
    phases: Vec<(String, Duration)>,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            phases: Vec::new(),
        }
    }

    /// Charge the time since the last mark to `label` and return it.
    pub fn mark(&mut self, label: &str) -> Duration {
        let now = Instant::now();
        let spent = now - self.last;
        self.last = now;
        match self.phases.iter_mut().find(|(l, _)| l == label) {
            Some((_, total)) => *total += spent,
            None => self.phases.push((label.to_string(), spent)),
        }
        spent
    }

    /// Total time charged to `label` so far.
    pub fn total(&self, label: &str) -> Duration {
        self.phases
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, d)| *d)
            .unwrap_or_default()
    }

    /// Log every phase in the order it was first marked.
    pub fn report(&self) {
        for (label, spent) in &self.phases {
            info!("{:>12}: {:?}", label, spent);
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

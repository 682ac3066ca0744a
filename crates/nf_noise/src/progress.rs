use std::sync::atomic::{AtomicUsize, Ordering};

use nf_core::NoiseConfig;

/// Thread-safe progress tracker for field generation.
/// Rows report completion from rayon workers without locking.
pub struct GenerationProgress {
    completed: AtomicUsize,
    total_samples: usize,
}

impl GenerationProgress {
    /// Create a new progress tracker for the given total sample count.
    pub fn new(total_samples: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total_samples,
        }
    }

    /// Tracker sized for a field generated from `config`.
    pub fn for_config(config: &NoiseConfig) -> Self {
        Self::new(config.sample_count())
    }

    /// Record `amount` finished samples. Rows call this from their worker thread.
    pub fn increment(&self, amount: usize) {
        self.completed.fetch_add(amount, Ordering::Relaxed);
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Share of the field sampled so far, capped at 1.0.
    pub fn fraction(&self) -> f32 {
        if self.total_samples == 0 {
            return 0.0;
        }
        (self.completed() as f32 / self.total_samples as f32).min(1.0)
    }

    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    pub fn is_complete(&self) -> bool {
        self.completed() >= self.total_samples
    }

    pub fn reset(&self) {
        self.completed.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracking() {
        let progress = GenerationProgress::new(100);

        progress.increment(50);
        assert_eq!(progress.completed(), 50);
        assert!((progress.fraction() - 0.5).abs() < 0.001);
        assert!(!progress.is_complete());

        progress.increment(50);
        assert!((progress.fraction() - 1.0).abs() < 0.001);
        assert!(progress.is_complete());
    }

    #[test]
    fn empty_tracker_reports_zero_fraction() {
        let progress = GenerationProgress::new(0);
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn reset_clears_counter() {
        let progress = GenerationProgress::for_config(&NoiseConfig {
            resolution: 8,
            ..Default::default()
        });
        assert_eq!(progress.total_samples(), 64);
        progress.increment(42);
        progress.reset();
        assert_eq!(progress.completed(), 0);
    }
}

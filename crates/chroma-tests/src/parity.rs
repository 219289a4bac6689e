//! Parity testing framework
//!
//! Compares oxchroma conversions against a reference over a list of
//! samples and summarizes the differences.

use std::fmt;

use crate::reference::delta_e_2000;

/// Per-channel absolute differences
#[derive(Debug, Clone, Default)]
pub struct ChannelStats {
    /// Largest absolute difference in any channel
    pub max: f64,
    /// Mean absolute difference over all channels
    pub mean: f64,
    /// Sample at which `max` occurred
    pub worst: Option<usize>,
    /// Number of samples
    pub count: usize,
}

impl ChannelStats {
    /// Compare two equally long lists of tuples
    pub fn compare<const N: usize>(ours: &[[f64; N]], reference: &[[f64; N]]) -> Self {
        let mut stats = ChannelStats {
            count: ours.len().min(reference.len()),
            ..Default::default()
        };
        let mut sum = 0.0;

        for (i, (a, b)) in ours.iter().zip(reference).enumerate() {
            for (x, y) in a.iter().zip(b) {
                let diff = (x - y).abs();
                sum += diff;
                if diff > stats.max {
                    stats.max = diff;
                    stats.worst = Some(i);
                }
            }
        }

        if stats.count > 0 {
            stats.mean = sum / (stats.count * N) as f64;
        }
        stats
    }
}

/// CIEDE2000 statistics
#[derive(Debug, Clone, Default)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Compare two equally long lists of CIE Lab colors
    pub fn compare(ours: &[[f64; 3]], reference: &[[f64; 3]]) -> Self {
        let diffs: Vec<f64> = ours
            .iter()
            .zip(reference)
            .map(|(a, b)| delta_e_2000(*a, *b))
            .collect();

        let count = diffs.len();
        if count == 0 {
            return Self::default();
        }
        Self {
            mean: diffs.iter().sum::<f64>() / count as f64,
            max: diffs.iter().copied().fold(0.0, f64::max),
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }
}

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// Channel statistics
    pub channels: ChannelStats,
    /// Allowed maximum channel difference
    pub tolerance: f64,
}

impl ParityResult {
    pub fn passed(&self) -> bool {
        self.channels.max <= self.tolerance
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: max {:.3e} (sample {:?}), mean {:.3e} over {} samples, tolerance {:.1e}",
            self.test_name,
            self.channels.max,
            self.channels.worst,
            self.channels.mean,
            self.channels.count,
            self.tolerance
        )
    }
}

/// A named comparison of one conversion against its reference
pub struct ParityTest {
    /// Test name
    pub name: String,
    /// Allowed maximum channel difference
    pub tolerance: f64,
}

impl ParityTest {
    pub fn new(name: impl Into<String>, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            tolerance,
        }
    }

    /// Run both conversions over `samples` and compare
    pub fn run<const N: usize>(
        &self,
        samples: &[[f64; 3]],
        ours: impl Fn([f64; 3]) -> [f64; N],
        reference: impl Fn([f64; 3]) -> [f64; N],
    ) -> ParityResult {
        let a: Vec<_> = samples.iter().map(|s| ours(*s)).collect();
        let b: Vec<_> = samples.iter().map(|s| reference(*s)).collect();

        ParityResult {
            test_name: self.name.clone(),
            channels: ChannelStats::compare(&a, &b),
            tolerance: self.tolerance,
        }
    }
}

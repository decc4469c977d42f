use serde::{Serialize, Deserialize};

/// Trace record emitted once per completed epoch.
///
/// `weight` and `bias` are the parameters after the epoch's last update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch budget of this run.
    pub total_epochs: usize,
    /// Number of misclassified examples during this epoch.
    pub total_error: usize,
    pub weight: f64,
    pub bias: f64,
}

impl EpochStats {
    pub fn converged(&self) -> bool {
        self.total_error == 0
    }
}

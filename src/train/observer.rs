use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Receives one `EpochStats` at the end of every epoch.
///
/// Observers run synchronously on the training thread and cannot influence
/// the run; the epoch budget is the only bound.
pub trait EpochObserver {
    fn on_epoch(&mut self, stats: &EpochStats);
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EpochObserver for NoopObserver {
    fn on_epoch(&mut self, _stats: &EpochStats) {}
}

/// Writes each record to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl EpochObserver for LogObserver {
    fn on_epoch(&mut self, stats: &EpochStats) {
        log::debug!(
            "epoch {}/{}: total_error={} weight={:.4} bias={:.4}",
            stats.epoch,
            stats.total_epochs,
            stats.total_error,
            stats.weight,
            stats.bias
        );
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&EpochStats)> EpochObserver for FnObserver<F> {
    fn on_epoch(&mut self, stats: &EpochStats) {
        (self.0)(stats)
    }
}

impl EpochObserver for Vec<EpochStats> {
    fn on_epoch(&mut self, stats: &EpochStats) {
        self.push(*stats);
    }
}

/// Forwards records to another thread. A dropped receiver is ignored.
impl EpochObserver for mpsc::Sender<EpochStats> {
    fn on_epoch(&mut self, stats: &EpochStats) {
        let _ = self.send(*stats);
    }
}

impl<O: EpochObserver + ?Sized> EpochObserver for &mut O {
    fn on_epoch(&mut self, stats: &EpochStats) {
        (**self).on_epoch(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(epoch: usize) -> EpochStats {
        EpochStats { epoch, total_epochs: 3, total_error: 1, weight: 0.5, bias: -0.5 }
    }

    #[test]
    fn vec_collects_in_order() {
        let mut trace: Vec<EpochStats> = Vec::new();
        trace.on_epoch(&stats(1));
        trace.on_epoch(&stats(2));
        assert_eq!(trace.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn closure_observer() {
        let mut seen = 0;
        {
            let mut obs = FnObserver(|s: &EpochStats| seen += s.epoch);
            obs.on_epoch(&stats(2));
            obs.on_epoch(&stats(3));
        }
        assert_eq!(seen, 5);
    }

    #[test]
    fn sender_survives_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel();
        tx.on_epoch(&stats(1));
        assert_eq!(rx.recv().unwrap().epoch, 1);
        drop(rx);
        tx.on_epoch(&stats(2));
    }
}

// Copyright @yucwang 2026

use crate::core::simulator::SweepResult;
use crate::core::tracker::{ ModelKind, ResultsSink };

/// Reports every frequency pass through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink {
    consumed: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweeps received so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl ResultsSink for LogSink {
    fn consume(&mut self, kind: ModelKind, results: &SweepResult) {
        self.consumed += 1;
        for pass in results.iter() {
            let energies: Vec<String> = pass.energies.iter().map(|e| format!("{:.6}", e)).collect();
            log::info!("{:?} model, {} Hz: total {:.6} W, per collector [{}].",
                       kind, pass.frequency, pass.total(), energies.join(", "));
        }
    }
}

use crate::domain::model::EvolutionSnapshot;
use crate::domain::ports::EvolutionObserver;
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub timestamp: String,
    pub snapshot: EvolutionSnapshot,
}

/// Records one timestamped entry per step. Recording is silent; the engine
/// owns the debug trace lines.
pub struct EvolutionLogger {
    entries: Mutex<Vec<TraceEntry>>,
}

static GLOBAL_LOGGER: Lazy<Arc<EvolutionLogger>> = Lazy::new(|| Arc::new(EvolutionLogger::new()));

impl EvolutionLogger {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// 整個程序共用一份追蹤紀錄。
    pub fn global() -> Arc<EvolutionLogger> {
        GLOBAL_LOGGER.clone()
    }

    pub fn entries(&self) -> Vec<TraceEntry> {
        self.entries.lock().expect("trace log poisoned").clone()
    }

    pub fn clear(&self) {
        self.entries.lock().expect("trace log poisoned").clear();
    }

    pub fn to_json(&self) -> Result<String> {
        let entries = self.entries();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

impl Default for EvolutionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EvolutionObserver for EvolutionLogger {
    fn on_evolution_step(&self, snapshot: &EvolutionSnapshot) {
        let entry = TraceEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            snapshot: snapshot.clone(),
        };
        self.entries.lock().expect("trace log poisoned").push(entry);
    }
}

/// Null object: observes without acting.
pub struct SilentObserver;

impl EvolutionObserver for SilentObserver {
    fn on_evolution_step(&self, _snapshot: &EvolutionSnapshot) {}
}

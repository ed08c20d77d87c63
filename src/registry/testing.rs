//! Deterministic probe and sleeper for tests.

use crate::registry::poll::Sleeper;
use crate::registry::probe::{classify_status, ResourceProbe};
use crate::types::{IndexCheckError, ProbeOutcome, Result};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted answer for one probe.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Found,
    NotFound,
    Status(u16),
    Offline,
}

/// Replays a script of answers; the last step repeats once the script runs out.
pub struct ScriptedProbe {
    steps: Vec<Step>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ResourceProbe for ScriptedProbe {
    async fn probe(&self, url: &str) -> Result<ProbeOutcome> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        let step = self
            .steps
            .get(call)
            .or(self.steps.last())
            .copied()
            .unwrap_or(Step::NotFound);

        match step {
            Step::Found => Ok(ProbeOutcome::Found),
            Step::NotFound => Ok(ProbeOutcome::NotFound),
            Step::Status(code) => classify_status(StatusCode::from_u16(code).unwrap()),
            Step::Offline => Err(IndexCheckError::Network),
        }
    }
}

/// Records requested waits without waiting.
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

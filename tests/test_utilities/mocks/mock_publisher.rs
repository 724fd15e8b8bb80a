use async_trait::async_trait;
use ghsa_stix::prelude::*;
use std::sync::{Arc, Mutex};

/// Everything the sink observed, for post-run assertions
#[derive(Debug, Default)]
pub struct PublisherState {
    pub initiated: Vec<String>,
    pub sent: Vec<String>,
    pub completed: Vec<String>,
}

/// Mock BundlePublisher recording the work protocol
pub struct RecordingPublisher {
    state: Arc<Mutex<PublisherState>>,
    fail_on_send: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PublisherState::default())),
            fail_on_send: false,
        }
    }

    pub fn failing_on_send() -> Self {
        Self {
            state: Arc::new(Mutex::new(PublisherState::default())),
            fail_on_send: true,
        }
    }

    /// Shared handle to the recorded state.
    pub fn handle(&self) -> Arc<Mutex<PublisherState>> {
        self.state.clone()
    }
}

impl Default for RecordingPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BundlePublisher for RecordingPublisher {
    async fn initiate_work(&self, run_label: &str) -> Result<WorkId> {
        self.state
            .lock()
            .unwrap()
            .initiated
            .push(run_label.to_string());
        Ok(WorkId("work-1".to_string()))
    }

    async fn send_bundle(&self, _work: &WorkId, payload: &str) -> Result<()> {
        if self.fail_on_send {
            return Err(ConnectorError::Transport {
                reason: "mock sink unreachable".to_string(),
            }
            .into());
        }
        self.state.lock().unwrap().sent.push(payload.to_string());
        Ok(())
    }

    async fn complete_work(&self, _work: &WorkId, message: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .completed
            .push(message.to_string());
        Ok(())
    }
}

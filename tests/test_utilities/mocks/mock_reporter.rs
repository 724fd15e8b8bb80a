use ghsa_stix::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RunReporter collecting messages for assertions
pub struct MockRunReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockRunReporter {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the collected messages.
    pub fn handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.messages.clone()
    }
}

impl Default for MockRunReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReporter for MockRunReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

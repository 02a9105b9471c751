use crate::application::RunEvent;
use crate::ports::outbound::{LookupProgress, ProgressReporter};
use std::sync::mpsc::Sender;
use uuid::Uuid;

/// ChannelProgressReporter adapter for reporting progress as `RunEvent`s
///
/// Send failures are ignored: a caller that dropped its receiver has
/// stopped listening, and the run itself must not fail because of that.
pub struct ChannelProgressReporter {
    run_id: Uuid,
    sender: Sender<RunEvent>,
}

impl ChannelProgressReporter {
    pub fn new(run_id: Uuid, sender: Sender<RunEvent>) -> Self {
        Self { run_id, sender }
    }

    fn send(&self, event: RunEvent) {
        let _ = self.sender.send(event);
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn report(&self, message: &str) {
        self.send(RunEvent::Message(message.to_string()));
    }

    fn report_started(&self, total: usize) {
        self.send(RunEvent::Started {
            run_id: self.run_id,
            total,
        });
    }

    fn report_progress(&self, progress: &LookupProgress) {
        self.send(RunEvent::Progress(progress.clone()));
    }

    fn report_error(&self, message: &str) {
        self.send(RunEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.send(RunEvent::Completion(message.to_string()));
    }
}

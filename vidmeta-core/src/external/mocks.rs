// vidmeta-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{Merger, ProbeOutput, Prober};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// What the mock returns on the next call.
pub enum MockResponse {
    Output(ProbeOutput),
    UnexpectedExit(Option<i32>, String),
    ToolNotFound,
    ProbeFailed(String),
}

/// Mock implementation of Prober that records every probed path.
pub struct MockProber {
    response: MockResponse,
    received_calls: RefCell<Vec<PathBuf>>,
}

impl MockProber {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            received_calls: RefCell::new(Vec::new()),
        }
    }

    /// A prober that succeeds with ffmpeg's conventional status 1.
    pub fn with_text(text: &str) -> Self {
        Self::new(MockResponse::Output(ProbeOutput {
            exit_status: 1,
            diagnostic_text: text.to_string(),
        }))
    }

    pub fn get_received_calls(&self) -> Vec<PathBuf> {
        self.received_calls.borrow().clone()
    }
}

impl Prober for MockProber {
    fn probe(&self, path: &Path) -> CoreResult<ProbeOutput> {
        self.received_calls.borrow_mut().push(path.to_path_buf());
        match &self.response {
            MockResponse::Output(output) => Ok(output.clone()),
            MockResponse::UnexpectedExit(status, text) => Err(CoreError::UnexpectedExitStatus {
                tool: "ffmpeg".to_string(),
                status: *status,
                diagnostic_text: text.clone(),
            }),
            MockResponse::ToolNotFound => Err(CoreError::ToolNotFound("ffmpeg".to_string())),
            MockResponse::ProbeFailed(detail) => Err(CoreError::ProbeFailed(detail.clone())),
        }
    }
}

/// Mock implementation of Merger failing for inputs whose name contains
/// `fail_marker`, recording every (input, output) pair.
pub struct MockMerger {
    fail_marker: String,
    received_calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl MockMerger {
    pub fn failing_on(fail_marker: &str) -> Self {
        Self {
            fail_marker: fail_marker.to_string(),
            received_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn get_received_calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.received_calls.borrow().clone()
    }
}

impl Merger for MockMerger {
    fn merge(&self, input: &Path, output: &Path) -> CoreResult<()> {
        self.received_calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf()));
        if input.to_string_lossy().contains(&self.fail_marker) {
            Err(CoreError::UnexpectedExitStatus {
                tool: "ffmpeg".to_string(),
                status: Some(1),
                diagnostic_text: "Stream map '0:a:1' matches no streams.".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

//! Upload session and upload dialog state.
//!
//! The progress value is cosmetic: it advances on a timer while the ingest
//! request is outstanding and is never derived from transferred bytes.
//!
//! ```text
//! Idle ──begin──▶ Uploading ──settle──▶ Finalizing ──finish──▶ Idle
//!                  │  tick: +10 every 50 ms, stops at ≥ 95
//!                  └─ settle forces progress to 100
//! ```

use crate::config::{PROGRESS_HOLD_AT, PROGRESS_STEP};
use crate::types::{AppError, AppResult, FileInfo};

/// Where a dropzone is in its upload cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Finalizing,
}

/// State of one dropzone. At most one session is active at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSession {
    phase: UploadPhase,
    progress: u8,
    file: Option<FileInfo>,
    ticking: bool,
}

impl UploadSession {
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// Progress in `[0, 100]`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// The single retained file.
    pub fn file(&self) -> Option<&FileInfo> {
        self.file.as_ref()
    }

    /// True from `begin` until `finish`, finalization included.
    pub fn is_uploading(&self) -> bool {
        self.phase != UploadPhase::Idle
    }

    /// Start a new session for `file`, replacing the previous selection.
    ///
    /// Rejected with [`AppError::Busy`] unless idle.
    pub fn begin(&mut self, file: FileInfo) -> AppResult<()> {
        if self.phase != UploadPhase::Idle {
            return Err(AppError::Busy);
        }
        self.phase = UploadPhase::Uploading;
        self.progress = 0;
        self.file = Some(file);
        self.ticking = true;
        Ok(())
    }

    /// Advance simulated progress by one step.
    ///
    /// Returns whether the ticker should keep running. Once the value reaches
    /// the hold threshold it stays there until [`settle`](Self::settle).
    pub fn tick(&mut self) -> bool {
        if self.phase != UploadPhase::Uploading || !self.ticking {
            return false;
        }
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
        if self.progress >= PROGRESS_HOLD_AT {
            self.ticking = false;
        }
        self.ticking
    }

    /// The ingest request settled, successfully or not.
    pub fn settle(&mut self) {
        if self.phase == UploadPhase::Uploading {
            self.phase = UploadPhase::Finalizing;
            self.progress = 100;
            self.ticking = false;
        }
    }

    /// The finalize pause elapsed.
    pub fn finish(&mut self) {
        if self.phase == UploadPhase::Finalizing {
            self.phase = UploadPhase::Idle;
        }
    }
}

/// Open/closed state of the modal hosting the dropzone.
///
/// Only the trigger opens it; change requests may only close it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadDialog {
    open: bool,
}

impl UploadDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn trigger(&mut self) {
        self.open = true;
    }

    /// Handle an open-change request from the modal (overlay click, close button).
    pub fn request_change(&mut self, open: bool) {
        if !open {
            self.open = false;
        }
    }
}

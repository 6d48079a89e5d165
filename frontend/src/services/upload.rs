//! PDF upload to the ingestion endpoint.
//!
//! The dropzone drives [`UploadFlow`]; the progress shown meanwhile is the
//! simulated value kept in [`UploadSession`](crate::state::UploadSession).

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{
    backend_url, ACCEPTED_MIME, FINALIZE_DELAY_MS, INGEST_PATH, MAX_FILE_SIZE, PROGRESS_TICK_MS,
};
use crate::services::{Notifier, Timers};
use crate::state::{StateCell, UploadSession};
use crate::types::{AppError, AppResult, FileInfo};

/// Backend that accepts a document for processing.
#[allow(async_fn_in_trait)]
pub trait Ingestor {
    type File;

    async fn ingest(&self, file: &Self::File) -> AppResult<()>;
}

/// Multipart POST to the ingestion endpoint.
#[derive(Clone, Debug)]
pub struct HttpIngestor {
    url: String,
}

impl Default for HttpIngestor {
    fn default() -> Self {
        Self {
            url: backend_url(INGEST_PATH),
        }
    }
}

impl Ingestor for HttpIngestor {
    type File = File;

    async fn ingest(&self, file: &File) -> AppResult<()> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob("file", file)
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

        log::info!("📤 Uploading {} to {}", file.name(), self.url);
        let response = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| AppError::Ingest(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Ingest(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Ingest(format!(
                "Server error ({}): {}",
                response.status(),
                error_text
            )));
        }

        log::info!("✅ {} accepted for processing", file.name());
        Ok(())
    }
}

/// Metadata of a browser file.
pub fn file_info(file: &File) -> FileInfo {
    FileInfo {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}

/// Accept only PDFs within the size limit.
pub fn validate_file(file: &FileInfo) -> AppResult<()> {
    let is_pdf = file.mime == ACCEPTED_MIME || file.name.to_ascii_lowercase().ends_with(".pdf");
    if !is_pdf {
        return Err(AppError::InvalidFile(format!("{} is not a PDF", file.name)));
    }
    if file.size > MAX_FILE_SIZE {
        return Err(AppError::InvalidFile(format!(
            "{} is larger than {} MB",
            file.name,
            MAX_FILE_SIZE / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Dropzone controller: one upload at a time, simulated progress, explicit
/// failure notification.
#[derive(Clone)]
pub struct UploadFlow<I, T, N, S> {
    ingestor: I,
    timers: T,
    notifier: N,
    session: S,
}

impl<I, T, N, S> UploadFlow<I, T, N, S>
where
    I: Ingestor,
    T: Timers,
    N: Notifier,
    S: StateCell<UploadSession> + Clone + 'static,
{
    pub fn new(ingestor: I, timers: T, notifier: N, session: S) -> Self {
        Self {
            ingestor,
            timers,
            notifier,
            session,
        }
    }

    /// Upload a dropped or picked file.
    ///
    /// Returns [`AppError::Busy`] without side effects if a session is
    /// already running.
    pub async fn upload(&self, file: I::File, info: FileInfo) -> AppResult<()> {
        if let Err(e) = validate_file(&info) {
            self.notifier.error(&e.to_string());
            return Err(e);
        }

        let mut begun = Err(AppError::Busy);
        self.session.modify(|session| begun = session.begin(info));
        if let Err(e) = begun {
            log::warn!("Ignoring dropped file, an upload is already running");
            return Err(e);
        }

        let ticker = {
            let session = self.session.clone();
            self.timers.start_ticker(
                PROGRESS_TICK_MS,
                Box::new(move || {
                    let mut more = false;
                    session.modify(|session| more = session.tick());
                    more
                }),
            )
        };

        let result = self.ingestor.ingest(&file).await;

        ticker.cancel();
        self.session.modify(UploadSession::settle);

        if let Err(e) = &result {
            log::error!("Error while uploading file: {}", e);
            self.notifier.error(&e.to_string());
        }

        self.timers.sleep(FINALIZE_DELAY_MS).await;
        self.session.modify(UploadSession::finish);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::state::UploadPhase;
    use crate::testing::{ManualTimers, Notice, RecordingNotifier};

    /// Records the session seen at request time and returns a canned result.
    struct StubIngestor {
        result: AppResult<()>,
        session: Rc<RefCell<UploadSession>>,
        seen: RefCell<Vec<(String, UploadSession)>>,
    }

    impl Ingestor for StubIngestor {
        type File = String;

        async fn ingest(&self, file: &String) -> AppResult<()> {
            self.seen
                .borrow_mut()
                .push((file.clone(), self.session.borrow().clone()));
            self.result.clone()
        }
    }

    fn pdf(name: &str, size: u64) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            size,
            mime: ACCEPTED_MIME.to_string(),
        }
    }

    fn setup(
        result: AppResult<()>,
        ticks: usize,
    ) -> (
        UploadFlow<Rc<StubIngestor>, ManualTimers, RecordingNotifier, Rc<RefCell<UploadSession>>>,
        Rc<StubIngestor>,
        ManualTimers,
        RecordingNotifier,
        Rc<RefCell<UploadSession>>,
    ) {
        let session = Rc::new(RefCell::new(UploadSession::default()));
        let ingestor = Rc::new(StubIngestor {
            result,
            session: Rc::clone(&session),
            seen: RefCell::new(Vec::new()),
        });
        let timers = ManualTimers::with_ticks(ticks);
        let notifier = RecordingNotifier::default();
        let flow = UploadFlow::new(
            Rc::clone(&ingestor),
            timers.clone(),
            notifier.clone(),
            Rc::clone(&session),
        );
        (flow, ingestor, timers, notifier, session)
    }

    impl<I: Ingestor> Ingestor for Rc<I> {
        type File = I::File;

        async fn ingest(&self, file: &I::File) -> AppResult<()> {
            (**self).ingest(file).await
        }
    }

    #[test]
    fn test_successful_upload_runs_full_cycle() {
        let (flow, ingestor, timers, notifier, session) = setup(Ok(()), 3);

        block_on(flow.upload("doc".to_string(), pdf("doc.pdf", 10))).unwrap();

        let seen = ingestor.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "doc");
        assert_eq!(seen[0].1.phase(), UploadPhase::Uploading);
        assert_eq!(seen[0].1.progress(), 30);

        let session = session.borrow();
        assert_eq!(session.phase(), UploadPhase::Idle);
        assert_eq!(session.progress(), 100);
        assert_eq!(timers.sleeps(), vec![FINALIZE_DELAY_MS]);
        assert_eq!(timers.periods(), vec![PROGRESS_TICK_MS]);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_ticker_stops_at_hold_threshold() {
        let (flow, ingestor, _timers, _notifier, _session) = setup(Ok(()), 50);

        block_on(flow.upload("doc".to_string(), pdf("doc.pdf", 10))).unwrap();

        let seen = ingestor.seen.borrow();
        assert!(seen[0].1.progress() >= crate::config::PROGRESS_HOLD_AT);
        assert!(seen[0].1.progress() <= 100);
    }

    #[test]
    fn test_ingest_failure_is_surfaced() {
        let (flow, _ingestor, timers, notifier, session) =
            setup(Err(AppError::Ingest("Server error (500): boom".to_string())), 0);

        let result = block_on(flow.upload("doc".to_string(), pdf("doc.pdf", 10)));

        assert!(matches!(result, Err(AppError::Ingest(_))));
        assert_eq!(
            notifier.notices(),
            vec![Notice::Error("Upload failed: Server error (500): boom".to_string())]
        );
        assert_eq!(session.borrow().phase(), UploadPhase::Idle);
        assert_eq!(session.borrow().progress(), 100);
        assert_eq!(timers.sleeps(), vec![FINALIZE_DELAY_MS]);
    }

    #[test]
    fn test_invalid_file_never_uploads() {
        let (flow, ingestor, timers, notifier, session) = setup(Ok(()), 0);

        let too_big = pdf("big.pdf", MAX_FILE_SIZE + 1);
        assert!(block_on(flow.upload("big".to_string(), too_big)).is_err());

        let not_pdf = FileInfo {
            name: "notes.txt".to_string(),
            size: 10,
            mime: "text/plain".to_string(),
        };
        assert!(block_on(flow.upload("txt".to_string(), not_pdf)).is_err());

        assert!(ingestor.seen.borrow().is_empty());
        assert!(timers.periods().is_empty());
        assert_eq!(notifier.notices().len(), 2);
        assert_eq!(*session.borrow(), UploadSession::default());
    }

    #[test]
    fn test_drop_while_uploading_is_ignored() {
        let (flow, ingestor, _timers, notifier, session) = setup(Ok(()), 0);
        session.borrow_mut().begin(pdf("first.pdf", 10)).unwrap();

        let result = block_on(flow.upload("second".to_string(), pdf("second.pdf", 10)));

        assert_eq!(result, Err(AppError::Busy));
        assert!(ingestor.seen.borrow().is_empty());
        assert!(notifier.notices().is_empty());
        assert_eq!(session.borrow().file().map(|f| f.name.as_str()), Some("first.pdf"));
    }

    #[test]
    fn test_validate_file_accepts_pdf_by_extension() {
        let file = FileInfo {
            name: "Report.PDF".to_string(),
            size: 10,
            mime: String::new(),
        };
        assert!(validate_file(&file).is_ok());
    }
}

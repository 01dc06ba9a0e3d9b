//! Background regeneration on a dedicated worker thread.
//!
//! The caller submits [`GenerationRequest`]s and polls for results. A new
//! submission cancels the job in flight; only complete generations of the
//! latest submission are ever handed back.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use tracing::debug;
use verdant_biome::BiomeCatalog;

use crate::{CancelToken, Generation, GenerationRequest, GridError, regenerate};

/// Outcome of one submitted regeneration.
#[derive(Debug)]
pub struct RegenerationResult {
    /// Ticket returned by [`RegenerationWorker::submit`].
    pub ticket: u64,
    pub outcome: Result<Generation, GridError>,
}

struct Job {
    ticket: u64,
    request: GenerationRequest,
    catalog: Arc<BiomeCatalog>,
    cancel: CancelToken,
}

/// Owns one worker thread that runs [`regenerate`] off the caller's thread.
pub struct RegenerationWorker {
    job_sender: Option<Sender<Job>>,
    result_receiver: Receiver<RegenerationResult>,
    /// Ticket and cancel flag of the job whose result is still wanted.
    current: Option<(u64, CancelToken)>,
    next_ticket: u64,
    handle: Option<JoinHandle<()>>,
}

impl RegenerationWorker {
    /// Start the worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WorkerSpawn`] if the OS refuses to create the thread.
    pub fn spawn() -> Result<Self, GridError> {
        let (job_sender, job_receiver) = unbounded::<Job>();
        let (result_sender, result_receiver) = unbounded::<RegenerationResult>();

        let handle = std::thread::Builder::new()
            .name("verdant-regen".into())
            .spawn(move || run(job_receiver, result_sender))
            .map_err(GridError::WorkerSpawn)?;

        Ok(Self {
            job_sender: Some(job_sender),
            result_receiver,
            current: None,
            next_ticket: 1,
            handle: Some(handle),
        })
    }

    /// Queue a regeneration, superseding any job still in flight.
    ///
    /// Returns the ticket that will identify the result.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WorkerDisconnected`] if the worker thread has exited.
    pub fn submit(
        &mut self,
        request: GenerationRequest,
        catalog: Arc<BiomeCatalog>,
    ) -> Result<u64, GridError> {
        self.cancel();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let cancel = CancelToken::new();
        let job = Job {
            ticket,
            request,
            catalog,
            cancel: cancel.clone(),
        };

        let sender = self
            .job_sender
            .as_ref()
            .ok_or(GridError::WorkerDisconnected)?;
        sender
            .send(job)
            .map_err(|_| GridError::WorkerDisconnected)?;

        self.current = Some((ticket, cancel));
        debug!(ticket, "regeneration submitted");
        Ok(ticket)
    }

    /// Cancel the job in flight, if any. Its result will never be returned.
    pub fn cancel(&mut self) {
        if let Some((ticket, cancel)) = self.current.take() {
            cancel.cancel();
            debug!(ticket, "regeneration superseded");
        }
    }

    /// Returns `true` while a submitted job has not yet produced its result.
    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Take the result of the latest submission if it is ready.
    pub fn try_recv(&mut self) -> Option<RegenerationResult> {
        while let Ok(result) = self.result_receiver.try_recv() {
            if self.accept(&result) {
                return Some(result);
            }
        }
        None
    }

    /// All ready results. Holds at most one entry, since superseded results
    /// are discarded.
    pub fn drain_results(&mut self) -> Vec<RegenerationResult> {
        let mut results = Vec::new();
        while let Some(result) = self.try_recv() {
            results.push(result);
        }
        results
    }

    /// Wait up to `timeout` for the result of the latest submission.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<RegenerationResult> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.result_receiver.recv_timeout(remaining) {
                Ok(result) if self.accept(&result) => return Some(result),
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn accept(&mut self, result: &RegenerationResult) -> bool {
        match &self.current {
            Some((ticket, _)) if *ticket == result.ticket => {
                self.current = None;
                true
            }
            _ => {
                debug!(ticket = result.ticket, "discarding stale regeneration result");
                false
            }
        }
    }
}

impl Drop for RegenerationWorker {
    fn drop(&mut self) {
        self.cancel();
        // Closing the job channel ends the worker loop.
        self.job_sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(jobs: Receiver<Job>, results: Sender<RegenerationResult>) {
    while let Ok(job) = jobs.recv() {
        if job.cancel.is_cancelled() {
            continue;
        }

        let outcome = regenerate(&job.request, job.catalog, &job.cancel);
        if job.cancel.is_cancelled() || matches!(outcome, Err(GridError::Cancelled)) {
            continue;
        }

        let result = RegenerationResult {
            ticket: job.ticket,
            outcome,
        };
        if results.send(result).is_err() {
            break;
        }
    }
}

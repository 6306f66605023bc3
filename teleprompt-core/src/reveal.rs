use crate::sched::{ScheduleHandle, Scheduler};
use crate::sink::RenderSink;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Pause between revealed characters. 5ms reads as a fast typewriter.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RevealError {
    /// A `<` with no `>` anywhere after it. Playback is refused up front
    /// instead of letting the tag scan run off the end of the source.
    #[error("unterminated tag opened at byte {offset}")]
    UnterminatedTag { offset: usize },
}

/// Reject sources the step loop cannot safely consume.
///
/// `<` is ASCII, so it always sits on a char boundary; everything
/// between a `<` and the next `>` is swallowed in one step at playback
/// time, exactly like the scan here.
pub fn validate_markup(source: &str) -> Result<(), RevealError> {
    let bytes = source.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            match source[i..].find('>') {
                Some(rel) => i += rel + 1,
                None => return Err(RevealError::UnterminatedTag { offset: i }),
            }
        } else {
            i += 1;
        }
    }
    Ok(())
}

struct JobState {
    cursor: usize,
    pending: Option<ScheduleHandle>,
    cancelled: bool,
}

/// One playback of one source string into one sink.
///
/// The whole step body runs under the state lock, so a superseded job
/// either finishes its current step wholly or observes `cancelled` and
/// writes nothing. Two jobs can never interleave output.
pub struct RevealJob<S> {
    source: String,
    delay: Duration,
    sink: Arc<Mutex<S>>,
    scheduler: Arc<dyn Scheduler>,
    state: Mutex<JobState>,
}

impl<S: RenderSink + Send + 'static> RevealJob<S> {
    /// True once the cursor has consumed the whole source.
    pub fn is_done(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.cursor >= self.source.len()
    }

    fn is_cancelled(&self) -> bool {
        self.state.lock().unwrap().cancelled
    }

    /// Invalidate this job: its continuation will never write again.
    fn cancel(&self) {
        let mut state = self.state.lock().unwrap();
        state.cancelled = true;
        if let Some(handle) = state.pending.take() {
            handle.cancel();
        }
    }

    /// Schedule the first step. An empty source is inert immediately and
    /// schedules nothing.
    fn start(job: &Arc<Self>) {
        let mut state = job.state.lock().unwrap();
        if job.source.is_empty() {
            return;
        }
        Self::schedule_step(job, &mut state);
    }

    fn schedule_step(job: &Arc<Self>, state: &mut JobState) {
        let next = Arc::clone(job);
        state.pending = Some(
            job.scheduler
                .schedule(job.delay, Box::new(move || Self::step(&next))),
        );
    }

    /// One reveal step: append a single character, or a whole tag in one
    /// atomic go so raw markup never flashes on screen.
    fn step(job: &Arc<Self>) {
        let mut state = job.state.lock().unwrap();
        state.pending = None;
        if state.cancelled || state.cursor >= job.source.len() {
            return;
        }

        let rest = &job.source[state.cursor..];
        let chunk = if rest.starts_with('<') {
            let close = rest.find('>').expect("validated before playback");
            &rest[..=close]
        } else {
            let ch = rest.chars().next().expect("cursor inside source");
            &rest[..ch.len_utf8()]
        };

        job.sink.lock().unwrap().append(chunk);
        state.cursor += chunk.len();

        if state.cursor < job.source.len() {
            Self::schedule_step(job, &mut state);
        } else {
            trace!(len = job.source.len(), "reveal complete");
        }
    }
}

/// The front door of the reveal engine: one `Player` per display region.
///
/// `play` supersedes whatever is currently revealing: the old job's
/// continuation is cancelled before the region is cleared, so at most
/// one job ever writes to the sink.
pub struct Player<S> {
    sink: Arc<Mutex<S>>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
    current: Mutex<Option<Arc<RevealJob<S>>>>,
}

impl<S: RenderSink + Send + 'static> Player<S> {
    pub fn new(sink: S, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_delay(sink, scheduler, DEFAULT_STEP_DELAY)
    }

    pub fn with_delay(sink: S, scheduler: Arc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
            scheduler,
            delay,
            current: Mutex::new(None),
        }
    }

    /// Shared handle to the sink, for whoever presents its contents.
    pub fn sink(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.sink)
    }

    /// Start revealing `source`, superseding any playback still running.
    ///
    /// Malformed markup is rejected before anything is cancelled or
    /// cleared, so a bad source never disturbs what is on screen.
    pub fn play(&self, source: &str) -> Result<(), RevealError> {
        validate_markup(source)?;

        let mut current = self.current.lock().unwrap();
        if let Some(job) = current.take() {
            if !job.is_done() {
                debug!("superseding reveal job mid-playback");
            }
            job.cancel();
        }
        self.sink.lock().unwrap().clear();

        let job = Arc::new(RevealJob {
            source: source.to_string(),
            delay: self.delay,
            sink: Arc::clone(&self.sink),
            scheduler: Arc::clone(&self.scheduler),
            state: Mutex::new(JobState {
                cursor: 0,
                pending: None,
                cancelled: false,
            }),
        });
        RevealJob::start(&job);
        *current = Some(job);
        Ok(())
    }

    /// True while a job still has characters left to reveal.
    pub fn is_playing(&self) -> bool {
        let current = self.current.lock().unwrap();
        match current.as_ref() {
            Some(job) => !job.is_done() && !job.is_cancelled(),
            None => false,
        }
    }
}

use super::jobs::{Job, JobHandle, JobRunner, JobSubmitter};
use crate::error::{AppError, AppResult};
use futures_util::future::join_all;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

struct Queued {
    handle: JobHandle,
    job: Job,
}

struct Inner {
    sender: Mutex<Option<mpsc::Sender<Queued>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

/// Bounded in-process job queue drained by a fixed set of worker tasks.
///
/// Cloning is cheap and every clone feeds the same queue.
#[derive(Clone)]
pub struct JobQueue {
    inner: Arc<Inner>,
}

impl JobQueue {
    /// Spawns `workers` tasks on the current tokio runtime.
    pub fn start(runner: JobRunner, workers: usize, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel::<Queued>(capacity.max(1));
        let rx = Arc::new(tokio::sync::Mutex::new(rx));

        let handles = (0..workers.max(1))
            .map(|n| {
                let rx = rx.clone();
                let runner = runner.clone();
                tokio::spawn(async move {
                    loop {
                        // 锁只在取任务时持有，执行期间释放
                        let next = rx.lock().await.recv().await;
                        let Some(Queued { handle, job }) = next else {
                            break;
                        };
                        runner.run(&handle, &job).await;
                    }
                    log::debug!("Job worker {n} stopped");
                })
            })
            .collect();

        log::info!("Job queue started: workers={} capacity={}", workers.max(1), capacity.max(1));
        Self {
            inner: Arc::new(Inner {
                sender: Mutex::new(Some(tx)),
                workers: Mutex::new(handles),
            }),
        }
    }

    /// Stops accepting jobs and waits until every queued job has run.
    pub async fn shutdown(&self) {
        self.inner
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let handles: Vec<_> = self
            .inner
            .workers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();

        for result in join_all(handles).await {
            if let Err(e) = result {
                log::error!("Job worker panicked: {e}");
            }
        }
        log::info!("Job queue drained");
    }
}

impl JobSubmitter for JobQueue {
    fn submit(&self, job: Job) -> AppResult<JobHandle> {
        let guard = self
            .inner
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(sender) = guard.as_ref() else {
            return Err(AppError::JobQueueError("Job queue is shut down".into()));
        };

        let handle = JobHandle::new(&job);
        sender
            .try_send(Queued {
                handle: handle.clone(),
                job,
            })
            .map_err(|e| match e {
                TrySendError::Full(_) => AppError::JobQueueError("Job queue is full".into()),
                TrySendError::Closed(_) => {
                    AppError::JobQueueError("Job queue is shut down".into())
                }
            })?;

        log::debug!("Job {} queued: {job}", handle.id);
        Ok(handle)
    }
}

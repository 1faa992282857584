use crate::error::{AppError, AppResult};
use crate::services::{GameService, SubscribeService};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Amount added to a game's price by [`Job::BumpPrice`].
pub const PRICE_BUMP_AMOUNT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    BumpPrice { game_id: i64 },
    CancelSubscription { subscribe_id: i64 },
}

impl Job {
    pub fn name(&self) -> &'static str {
        match self {
            Job::BumpPrice { .. } => "bump_price",
            Job::CancelSubscription { .. } => "cancel_subscription",
        }
    }

    /// Builds a job from its registered name and positional arguments.
    pub fn from_name(name: &str, args: &[i64]) -> AppResult<Self> {
        let job = match (name, args) {
            ("bump_price", [game_id]) => Job::BumpPrice { game_id: *game_id },
            ("cancel_subscription", [subscribe_id]) => Job::CancelSubscription {
                subscribe_id: *subscribe_id,
            },
            ("bump_price" | "cancel_subscription", _) => {
                return Err(AppError::ValidationError(format!(
                    "Job {name} expects exactly one id argument, got {}",
                    args.len()
                )));
            }
            _ => {
                return Err(AppError::ValidationError(format!("Unknown job: {name}")));
            }
        };
        Ok(job)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::BumpPrice { game_id } => write!(f, "bump_price(game_id={game_id})"),
            Job::CancelSubscription { subscribe_id } => {
                write!(f, "cancel_subscription(subscribe_id={subscribe_id})")
            }
        }
    }
}

/// Receipt for a submitted job. There is no way to fetch its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobHandle {
    pub id: Uuid,
    pub name: String,
}

impl JobHandle {
    pub fn new(job: &Job) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: job.name().to_string(),
        }
    }
}

/// Accepts jobs for asynchronous execution.
pub trait JobSubmitter {
    fn submit(&self, job: Job) -> AppResult<JobHandle>;

    fn submit_named(&self, name: &str, args: &[i64]) -> AppResult<JobHandle> {
        self.submit(Job::from_name(name, args)?)
    }
}

/// Executes jobs against the database.
#[derive(Clone)]
pub struct JobRunner {
    games: GameService,
    subscribes: SubscribeService,
}

impl JobRunner {
    pub fn new(games: GameService, subscribes: SubscribeService) -> Self {
        Self { games, subscribes }
    }

    /// Runs the job. `Ok(false)` means its target no longer exists.
    pub async fn execute(&self, job: &Job) -> AppResult<bool> {
        match *job {
            Job::BumpPrice { game_id } => {
                self.games
                    .increment_price(game_id, PRICE_BUMP_AMOUNT)
                    .await
            }
            Job::CancelSubscription { subscribe_id } => self.subscribes.cancel(subscribe_id).await,
        }
    }

    /// Like [`execute`](Self::execute) but never fails; outcomes are logged.
    pub async fn run(&self, handle: &JobHandle, job: &Job) {
        match self.execute(job).await {
            Ok(true) => log::info!("Job {} done: {job}", handle.id),
            Ok(false) => log::debug!("Job {} skipped, target missing: {job}", handle.id),
            Err(e) => log::error!("Job {} failed: {job}: {e}", handle.id),
        }
    }
}

//! Background jobs.
//!
//! Jobs are fire-and-forget: handlers (or any other caller) submit a [`Job`]
//! through a [`JobSubmitter`] and get a [`JobHandle`] back immediately. A fixed
//! pool of worker tasks drains the queue; failures are logged and dropped.

pub mod jobs;
pub mod queue;

pub use jobs::*;
pub use queue::*;

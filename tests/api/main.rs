mod helpers;
mod jobs;
mod subscriptions;

use chrono::Utc;

use crate::helpers::TestApp;
use games_backend::AppError;
use games_backend::handlers::ResponsePolicy;
use games_backend::tasks::{Job, JobQueue, JobSubmitter};

#[tokio::test]
async fn concurrent_price_bumps_are_not_lost() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let game = t.create_game("Chess", 100.0).await;
    let runner = t.runner();
    let job = Job::BumpPrice { game_id: game.id };

    let (a, b) = tokio::join!(runner.execute(&job), runner.execute(&job));
    assert!(a.unwrap());
    assert!(b.unwrap());

    assert_eq!(t.games.retrieve(game.id).await.unwrap().price, 120.0);
}

#[tokio::test]
async fn price_bump_on_missing_game_is_a_no_op() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let game = t.create_game("Chess", 100.0).await;
    t.games.delete(game.id).await.unwrap();

    let done = t
        .runner()
        .execute(&Job::BumpPrice { game_id: game.id })
        .await
        .unwrap();
    assert!(!done);
    assert!(matches!(
        t.games.retrieve(game.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn cancel_marks_subscription_inactive_today() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let game = t.create_game("Chess", 10.0).await;
    let user = t.create_user("alice").await;
    let sub = t.subscribe(game.id, user.id).await;
    assert!(sub.is_active);

    let done = t
        .runner()
        .execute(&Job::CancelSubscription {
            subscribe_id: sub.id,
        })
        .await
        .unwrap();
    assert!(done);

    let stored = t.subscribes.get(sub.id).await.unwrap();
    assert!(!stored.is_active);
    assert_eq!(stored.datetime_finished, Utc::now().date_naive());
}

#[tokio::test]
async fn cancel_of_missing_subscription_completes_silently() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let done = t
        .runner()
        .execute(&Job::CancelSubscription { subscribe_id: 999 })
        .await
        .unwrap();
    assert!(!done);
}

#[tokio::test]
async fn queue_drains_on_shutdown() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let game = t.create_game("Chess", 100.0).await;
    let queue = JobQueue::start(t.runner(), 2, 16);

    let first = queue.submit(Job::BumpPrice { game_id: game.id }).unwrap();
    let second = queue
        .submit_named("bump_price", &[game.id])
        .unwrap();
    assert_eq!(first.name, "bump_price");
    assert_ne!(first.id, second.id);

    queue.shutdown().await;
    assert_eq!(t.games.retrieve(game.id).await.unwrap().price, 120.0);

    assert!(matches!(
        queue.submit(Job::BumpPrice { game_id: game.id }),
        Err(AppError::JobQueueError(_))
    ));
}

#[tokio::test]
async fn unknown_job_name_is_rejected() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let queue = JobQueue::start(t.runner(), 1, 4);

    assert!(matches!(
        queue.submit_named("send_newsletter", &[1]),
        Err(AppError::ValidationError(_))
    ));
    queue.shutdown().await;
}

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::NaiveDate;

use crate::helpers::TestApp;
use games_backend::AppError;
use games_backend::entities::subscribe_entity::DEFAULT_DATETIME_FINISHED;
use games_backend::handlers::ResponsePolicy;
use games_backend::models::NewSubscribe;

#[tokio::test]
async fn new_subscription_uses_fixed_default_finish_date() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let game = t.create_game("Chess", 10.0).await;
    let user = t.create_user("alice").await;

    let sub = t.subscribe(game.id, user.id).await;
    assert!(sub.is_active);
    assert_eq!(sub.datetime_finished, DEFAULT_DATETIME_FINISHED);
    assert_eq!(
        DEFAULT_DATETIME_FINISHED,
        NaiveDate::from_ymd_opt(2023, 11, 16).unwrap()
    );

    let explicit = t
        .subscribes
        .create(NewSubscribe {
            game_id: game.id,
            user_id: user.id,
            datetime_finished: NaiveDate::from_ymd_opt(2024, 1, 31),
        })
        .await
        .unwrap();
    assert_eq!(
        explicit.datetime_finished,
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    );
}

#[actix_web::test]
async fn deleting_a_game_deletes_its_subscriptions() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let chess = t.create_game("Chess", 10.0).await;
    let go = t.create_game("Go", 5.0).await;
    let alice = t.create_user("alice").await;
    let bob = t.create_user("bob").await;
    t.subscribe(chess.id, alice.id).await;
    t.subscribe(chess.id, bob.id).await;
    let kept = t.subscribe(go.id, alice.id).await;

    let app = test::init_service(t.app()).await;
    let req = test::TestRequest::delete()
        .uri(&format!("/games/{}/", chess.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(t.subscribes.list_for_game(chess.id).await.unwrap().is_empty());
    let rows = t.subscribe_rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, kept.id);
}

#[tokio::test]
async fn deleting_a_user_deletes_their_subscriptions() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let game = t.create_game("Chess", 10.0).await;
    let alice = t.create_user("alice").await;
    let bob = t.create_user("bob").await;
    t.subscribe(game.id, alice.id).await;
    t.subscribe(game.id, bob.id).await;

    t.users.delete(alice.id).await.unwrap();

    assert!(t.subscribes.list_for_user(alice.id).await.unwrap().is_empty());
    let remaining = t.subscribes.list_for_game(game.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, bob.id);

    assert!(matches!(
        t.users.delete(alice.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn subscription_requires_existing_game() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    let user = t.create_user("alice").await;

    let result = t
        .subscribes
        .create(NewSubscribe {
            game_id: 404,
            user_id: user.id,
            datetime_finished: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::DatabaseError(_))));
}

#[tokio::test]
async fn usernames_are_unique_and_non_blank() {
    let t = TestApp::spawn(ResponsePolicy::strict()).await;
    t.create_user("alice").await;

    assert!(matches!(
        t.users.create("alice").await,
        Err(AppError::DatabaseError(_))
    ));
    assert!(matches!(
        t.users.create("   ").await,
        Err(AppError::ValidationError(_))
    ));
}

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use sea_orm::DatabaseConnection;

use games_backend::config::DatabaseConfig;
use games_backend::database::{create_pool, run_migrations};
use games_backend::entities::{subscribe_entity, user_entity};
use games_backend::handlers::ResponsePolicy;
use games_backend::models::{GameResponse, NewSubscribe, SubscribeResponse};
use games_backend::routes;
use games_backend::services::{GameService, SubscribeService, UserService};
use games_backend::tasks::JobRunner;
use serde_json::json;

pub struct TestApp {
    pub db: DatabaseConnection,
    pub games: GameService,
    pub subscribes: SubscribeService,
    pub users: UserService,
    pub policy: ResponsePolicy,
}

impl TestApp {
    /// Fresh in-memory SQLite database, fully migrated.
    pub async fn spawn(policy: ResponsePolicy) -> Self {
        // 单连接：内存库每个连接都是独立的数据库
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let db = create_pool(&config)
            .await
            .expect("Failed to open in-memory database");
        run_migrations(&db).await.expect("Failed to migrate");

        Self {
            games: GameService::new(db.clone()),
            subscribes: SubscribeService::new(db.clone()),
            users: UserService::new(db.clone()),
            db,
            policy,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.games.clone()))
            .app_data(web::Data::new(self.policy))
            .configure(routes)
    }

    pub fn runner(&self) -> JobRunner {
        JobRunner::new(self.games.clone(), self.subscribes.clone())
    }

    pub async fn create_game(&self, name: &str, price: f64) -> GameResponse {
        self.games
            .create(&json!({"name": name, "price": price}))
            .await
            .expect("Failed to create game")
    }

    pub async fn create_user(&self, username: &str) -> user_entity::Model {
        self.users
            .create(username)
            .await
            .expect("Failed to create user")
    }

    pub async fn subscribe(&self, game_id: i64, user_id: i64) -> SubscribeResponse {
        self.subscribes
            .create(NewSubscribe {
                game_id,
                user_id,
                datetime_finished: None,
            })
            .await
            .expect("Failed to create subscription")
    }

    pub async fn subscribe_rows(&self) -> Vec<subscribe_entity::Model> {
        use sea_orm::EntityTrait;
        subscribe_entity::Entity::find()
            .all(&self.db)
            .await
            .expect("Failed to query subscribes")
    }
}

use actix_web::{HttpResponse, Result, web};

use crate::error::{AppError, AppResult};
use crate::handlers::response::{Operation, ResponsePolicy};
use crate::models::*;
use crate::services::{GameService, UpdateOutcome};

#[utoipa::path(
    get,
    path = "/games/",
    tag = "games",
    params(GameListQuery),
    responses(
        (status = 200, description = "游戏列表", body = [GameResponse]),
        (status = 400, description = "查询参数错误", body = ApiErrorBody)
    )
)]
pub async fn list_games(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    query: web::Query<GameListQuery>,
) -> Result<HttpResponse> {
    match game_service.list(&query).await {
        Ok(games) => Ok(HttpResponse::Ok().json(games)),
        Err(e) => Ok(policy.error(Operation::List, e)),
    }
}

#[utoipa::path(
    get,
    path = "/games/search/",
    tag = "games",
    params(GameSearchQuery),
    responses(
        (status = 200, description = "按名称搜索", body = [GameResponse])
    )
)]
pub async fn search_games(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    query: web::Query<GameSearchQuery>,
) -> Result<HttpResponse> {
    match game_service.search(&query).await {
        Ok(games) => Ok(HttpResponse::Ok().json(games)),
        Err(e) => Ok(policy.error(Operation::Search, e)),
    }
}

#[utoipa::path(
    post,
    path = "/games/",
    tag = "games",
    request_body = GameInput,
    responses(
        (status = 200, description = "创建成功", body = StatusMessage),
        (status = 400, description = "字段校验失败", body = ApiErrorBody)
    )
)]
pub async fn create_game(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let result = match parse_json_body(&body) {
        Ok(value) => game_service.create(&value).await,
        Err(errors) => Err(AppError::Validation(errors)),
    };
    match result {
        Ok(game) => Ok(HttpResponse::Ok().json(StatusMessage::game_created(&game.name, game.id))),
        Err(e) => Ok(policy.error(Operation::Create, e)),
    }
}

#[utoipa::path(
    get,
    path = "/games/{id}/",
    tag = "games",
    params(("id" = i64, Path, description = "游戏 ID")),
    responses(
        (status = 200, description = "游戏详情", body = GameResponse),
        (status = 404, description = "游戏不存在", body = ApiErrorBody)
    )
)]
pub async fn get_game(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match game_service.retrieve(path.into_inner()).await {
        Ok(game) => Ok(HttpResponse::Ok().json(game)),
        Err(e) => Ok(policy.error(Operation::Retrieve, e)),
    }
}

#[utoipa::path(
    put,
    path = "/games/{id}/",
    tag = "games",
    params(("id" = i64, Path, description = "游戏 ID")),
    request_body = GameInput,
    responses(
        (status = 200, description = "更新成功；兼容模式下校验失败也返回 200 Warning", body = StatusMessage),
        (status = 400, description = "字段校验失败 (兼容模式下也表示游戏不存在)", body = ApiErrorBody),
        (status = 404, description = "游戏不存在", body = ApiErrorBody)
    )
)]
pub async fn update_game(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let outcome = apply_update(&game_service, path.into_inner(), &body, ValidationMode::Full).await;
    match outcome {
        Ok(outcome) => Ok(policy.update(outcome)),
        Err(e) => Ok(policy.error(Operation::Update, e)),
    }
}

#[utoipa::path(
    patch,
    path = "/games/{id}/",
    tag = "games",
    params(("id" = i64, Path, description = "游戏 ID")),
    request_body = GameInput,
    responses(
        (status = 200, description = "部分更新成功", body = StatusMessage),
        (status = 400, description = "字段校验失败", body = ApiErrorBody),
        (status = 404, description = "游戏不存在", body = ApiErrorBody)
    )
)]
pub async fn partial_update_game(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let outcome =
        apply_update(&game_service, path.into_inner(), &body, ValidationMode::Partial).await;
    match outcome {
        Ok(outcome) => Ok(policy.update(outcome)),
        Err(e) => Ok(policy.error(Operation::PartialUpdate, e)),
    }
}

#[utoipa::path(
    delete,
    path = "/games/{id}/",
    tag = "games",
    params(("id" = i64, Path, description = "游戏 ID")),
    responses(
        (status = 200, description = "删除成功，关联订阅一并删除", body = StatusMessage),
        (status = 404, description = "游戏不存在", body = ApiErrorBody)
    )
)]
pub async fn delete_game(
    game_service: web::Data<GameService>,
    policy: web::Data<ResponsePolicy>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match game_service.delete(path.into_inner()).await {
        Ok(game) => Ok(HttpResponse::Ok().json(StatusMessage::game_deleted(&game.name))),
        Err(e) => Ok(policy.error(Operation::Delete, e)),
    }
}

/// Unparseable bodies count as validation failures, but only once the game
/// is known to exist.
async fn apply_update(
    game_service: &GameService,
    id: i64,
    body: &[u8],
    mode: ValidationMode,
) -> AppResult<UpdateOutcome> {
    match parse_json_body(body) {
        Ok(value) => game_service.update(id, &value, mode).await,
        Err(errors) => Ok(UpdateOutcome::ValidationFailed {
            game: game_service.retrieve(id).await?,
            errors,
        }),
    }
}

pub fn game_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid query parameters: {err}")).into()
    }))
    .service(
        web::scope("/games")
            .route("/", web::get().to(list_games))
            .route("/", web::post().to(create_game))
            // search 必须在 {id} 之前注册
            .route("/search/", web::get().to(search_games))
            .route("/{id}/", web::get().to(get_game))
            .route("/{id}/", web::put().to(update_game))
            .route("/{id}/", web::patch().to(partial_update_game))
            .route("/{id}/", web::delete().to(delete_game)),
    );
}

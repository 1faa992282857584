use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::game::list_games,
        handlers::game::search_games,
        handlers::game::create_game,
        handlers::game::get_game,
        handlers::game::update_game,
        handlers::game::partial_update_game,
        handlers::game::delete_game,
    ),
    components(
        schemas(
            GameResponse,
            GameInput,
            StatusMessage,
            EnvelopeStatus,
            ApiErrorBody,
            ApiErrorDetail,
        )
    ),
    tags(
        (name = "games", description = "Game catalogue API"),
    ),
    info(
        title = "Games Backend API",
        version = "0.1.0",
        description = "Game catalogue REST API documentation"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

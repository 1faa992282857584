use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use games_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers::ResponsePolicy,
    middlewares::create_cors,
    routes,
    services::*,
    tasks::{JobQueue, JobRunner},
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().context("Failed to load configuration")?;

    // 创建数据库连接池并迁移
    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database connection pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    // 创建服务
    let game_service = GameService::new(pool.clone());
    let subscribe_service = SubscribeService::new(pool.clone());
    let policy = ResponsePolicy::from_config(&config.api);

    // 启动后台任务队列
    let job_queue = JobQueue::start(
        JobRunner::new(game_service.clone(), subscribe_service),
        config.jobs.workers,
        config.jobs.queue_capacity,
    );

    log::info!(
        "Starting HTTP server at {}:{} (legacy_responses={})",
        config.server.host,
        config.server.port,
        policy.is_legacy()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(game_service.clone()))
            .app_data(web::Data::new(policy))
            .configure(routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    // 等待队列中剩余任务执行完毕
    job_queue.shutdown().await;
    Ok(())
}

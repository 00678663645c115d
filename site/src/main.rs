use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

use site::{ServerConfig, server};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        config.dist_dir.display(),
        config.assets_dir.display(),
        config.host,
        config.port
    );
    if !config.dist_dir.join("index.html").is_file() {
        log::warn!(
            "{} has no index.html yet; run `trunk build` in ui/",
            config.dist_dir.display()
        );
    }

    let app_config = config.clone();
    HttpServer::new(move || {
        let server_config = app_config.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| server::configure(cfg, &server_config))
    })
    .bind(config.bind_addr())
    .with_context(|| format!("cannot bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("server stopped with an error")
}

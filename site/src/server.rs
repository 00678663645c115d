use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::ServerConfig;

/// Mounts the static bundle. Order matters: `/` matches every path, so the
/// assets mount has to come first.
pub fn configure(cfg: &mut web::ServiceConfig, server: &ServerConfig) {
    // ① top-level static assets
    cfg.service(Files::new("/assets", &server.assets_dir))
        // ② the SPA bundle built by Trunk, ③ falling back to index.html
        .service(
            Files::new("/", &server.dist_dir)
                .index_file("index.html")
                .default_handler(spa_fallback(server.dist_dir.join("index.html"))),
        );
}

/// Answers unknown paths with the SPA shell so the client router can decide
/// (including showing its own error page). A missing shell becomes a 404
/// response here rather than a service error.
fn spa_fallback(
    index: PathBuf,
) -> impl actix_web::dev::ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse,
    Error = actix_web::Error,
    InitError = (),
> {
    fn_service(move |req: ServiceRequest| {
        let index = index.clone();
        async move {
            let (req, _) = req.into_parts();
            let res = match open_index(&index).await {
                Ok(file) => file.into_response(&req),
                Err(e) => e.error_response(),
            };
            Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
        }
    })
}

async fn open_index(index: &Path) -> actix_web::Result<NamedFile> {
    NamedFile::open_async(index).await.map_err(|e| {
        log::error!("cannot open {}: {e}", index.display());
        e.into()
    })
}

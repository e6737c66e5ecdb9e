mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// What a request path maps to inside the embedded bundle.
#[derive(Debug, PartialEq, Eq)]
enum Asset<'a> {
    File(&'a str),
    /// Client-side routes (`/students`, `/reports`, ...) all load the app shell.
    Index,
}

fn resolve<'a>(request_path: &'a str, exists: impl Fn(&str) -> bool) -> Asset<'a> {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() || path.split('/').any(|segment| segment == "..") {
        return Asset::Index;
    }
    if exists(path) {
        Asset::File(path)
    } else {
        Asset::Index
    }
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = match resolve(req.path(), |path| STATIC_DIR.get_file(path).is_some()) {
        Asset::File(path) => path,
        Asset::Index => INDEX,
    };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            warn!("{INDEX} is missing from the embedded bundle; build the frontend first");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().unwrap_or_else(|err| {
        error!("{err}; using defaults");
        ServerConfig::default()
    });
    let url = config.url();

    if config.open_browser {
        let target = url.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let opened = tokio::task::spawn_blocking(move || webbrowser::open(&target)).await;
            if !matches!(opened, Ok(Ok(()))) {
                warn!("could not open a browser");
            }
        });
    }

    info!("Portal running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(path: &str) -> bool {
        matches!(path, "index.html" | "frontend-1a2b.js" | "frontend-1a2b_bg.wasm")
    }

    #[test]
    fn bundled_files_are_served_directly() {
        assert_eq!(resolve("/frontend-1a2b.js", bundle), Asset::File("frontend-1a2b.js"));
        assert_eq!(resolve("/frontend-1a2b_bg.wasm", bundle), Asset::File("frontend-1a2b_bg.wasm"));
    }

    #[test]
    fn app_routes_fall_back_to_the_shell() {
        for path in ["/", "", "/dashboard", "/students", "/vaccination-drive", "/no/such/page"] {
            assert_eq!(resolve(path, bundle), Asset::Index, "{path}");
        }
    }

    #[test]
    fn parent_segments_never_resolve_to_files() {
        assert_eq!(resolve("/../index.html", |_| true), Asset::Index);
    }
}

//! Serves the compiled form frontend embedded into the binary.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`, which is baked in
//! with `include_dir!`. This handler is the application's default service,
//! so it also answers every request no API route matched.

use crate::errors::route_not_found;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    if req.method() != Method::GET {
        return route_not_found();
    }

    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => route_not_found(),
    }
}

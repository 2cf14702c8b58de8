pub mod form;
pub mod pages;
pub mod sinks;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/usuario/{nombre}", get(pages::usuario))
        .route("/formulario", get(pages::formulario))
        // Form submission
        .route("/enviar", post(form::enviar))
        // Sink views
        .route("/leer_txt", get(sinks::leer_txt))
        .route("/leer_json", get(sinks::leer_json))
        .route("/leer_csv", get(sinks::leer_csv))
        .route("/ver_usuarios", get(sinks::ver_usuarios))
}

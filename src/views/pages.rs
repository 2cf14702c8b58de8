use askama::Template;
use axum::extract::Path;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "formulario.html")]
struct FormularioTemplate;

pub async fn index() -> impl IntoResponse {
    Html(IndexTemplate.render().unwrap_or_default())
}

pub async fn about() -> impl IntoResponse {
    Html(AboutTemplate.render().unwrap_or_default())
}

pub async fn usuario(Path(nombre): Path<String>) -> impl IntoResponse {
    format!("Bienvenido, {nombre}!")
}

pub async fn formulario() -> impl IntoResponse {
    Html(FormularioTemplate.render().unwrap_or_default())
}

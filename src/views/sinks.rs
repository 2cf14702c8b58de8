//! Read-only views over each sink, rendered as pretty-printed JSON inside
//! the result page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::db;
use crate::error::AppError;
use crate::sinks::{csv, json, text};
use crate::state::SharedState;
use crate::views::form::ResultadoTemplate;

fn render_pretty<T: serde::Serialize>(titulo: &str, data: &T) -> Result<String, AppError> {
    let template = ResultadoTemplate {
        ok: true,
        mensaje: titulo.to_string(),
        extra_pretty: serde_json::to_string_pretty(data)?,
    };
    Ok(template.render().unwrap_or_default())
}

pub async fn leer_txt(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let lines = text::read_lines(&state.sinks.txt)?;
    Ok(Html(render_pretty("TXT", &lines)?))
}

pub async fn leer_json(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let entries = json::read(&state.sinks.json);
    Ok(Html(render_pretty("JSON", &entries)?))
}

pub async fn leer_csv(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let rows = csv::read_rows(&state.sinks.csv)?;
    Ok(Html(render_pretty("CSV", &rows)?))
}

pub async fn ver_usuarios(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let usuarios = db::usuario::list_desc(&state.pool).await?;
    Ok(Html(render_pretty("SQLite", &usuarios)?))
}

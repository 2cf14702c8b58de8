use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Form;

use crate::error::AppError;
use crate::sinks;
use crate::state::SharedState;
use crate::submission::{self, SubmissionForm};

#[derive(Template)]
#[template(path = "resultado.html")]
pub struct ResultadoTemplate {
    pub ok: bool,
    pub mensaje: String,
    pub extra_pretty: String,
}

impl ResultadoTemplate {
    pub fn plain(ok: bool, mensaje: &str) -> Self {
        ResultadoTemplate {
            ok,
            mensaje: mensaje.to_string(),
            extra_pretty: String::new(),
        }
    }
}

pub async fn enviar(
    State(state): State<SharedState>,
    Form(form): Form<SubmissionForm>,
) -> Result<impl IntoResponse, AppError> {
    let sub = match submission::validate(&form) {
        Ok(sub) => sub,
        Err(err) => {
            let template = ResultadoTemplate::plain(false, err.user_message());
            return Ok(Html(template.render().unwrap_or_default()));
        }
    };

    let id = sinks::record(&state.sinks, &state.pool, &sub).await?;
    tracing::info!("Stored submission {id} from {}", sub.correo);

    let template = ResultadoTemplate::plain(true, "Datos guardados correctamente.");
    Ok(Html(template.render().unwrap_or_default()))
}

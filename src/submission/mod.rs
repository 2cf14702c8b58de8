//! Form field validation: presence after trimming, and a minimal email shape
//! check. Rejections carry the user-facing message rendered by the result
//! page; they are not server errors.

use serde::Deserialize;

use crate::models::Submission;

/// Raw fields as posted by the form. Missing fields default to empty strings
/// so they fall through to presence validation instead of a 422.
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub mensaje: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Completa todos los campos.",
            ValidationError::InvalidEmail => "Correo inválido.",
        }
    }
}

/// Validate raw form fields into a [`Submission`]. Order matters: presence
/// first, then the email check.
pub fn validate(form: &SubmissionForm) -> Result<Submission, ValidationError> {
    let nombre = form.nombre.trim();
    let correo = form.correo.trim();
    let mensaje = form.mensaje.trim();

    if nombre.is_empty() || correo.is_empty() || mensaje.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !correo.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Submission {
        nombre: nombre.to_string(),
        correo: correo.to_string(),
        mensaje: mensaje.to_string(),
    })
}

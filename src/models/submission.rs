use serde::{Deserialize, Serialize};

/// A validated contact-form submission. Field names follow the wire format
/// shared by the form, the JSON sink and the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub nombre: String,
    pub correo: String,
    pub mensaje: String,
}

/// A row of the `usuario` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct UsuarioRow {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub mensaje: String,
}

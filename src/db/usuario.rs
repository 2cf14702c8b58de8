use sqlx::SqlitePool;

use crate::models::{Submission, UsuarioRow};

/// Create the `usuario` table if absent. Runs on every startup.
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS usuario (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            correo TEXT NOT NULL,
            mensaje TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert(pool: &SqlitePool, sub: &Submission) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO usuario (nombre, correo, mensaje) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(&sub.nombre)
    .bind(&sub.correo)
    .bind(&sub.mensaje)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

pub async fn list_desc(pool: &SqlitePool) -> Result<Vec<UsuarioRow>, sqlx::Error> {
    sqlx::query_as::<_, UsuarioRow>(
        "SELECT id, nombre, correo, mensaje FROM usuario ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usuario")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use sqlx::SqlitePool;
use tempfile::TempDir;

use buzon::config::Config;
use buzon::sinks::SinkPaths;

/// A running test server backed by a fresh temporary data directory and
/// SQLite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: SqlitePool,
    pub sinks: SinkPaths,
    // Held so the temporary storage outlives the test.
    _storage: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Make a GET request, return (body, status).
    pub async fn get(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Post the contact form, return (body, status).
    pub async fn submit(&self, nombre: &str, correo: &str, mensaje: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/enviar"))
            .form(&[("nombre", nombre), ("correo", correo), ("mensaje", mensaje)])
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    pub fn read_txt(&self) -> String {
        std::fs::read_to_string(&self.sinks.txt).expect("read txt sink")
    }

    pub fn read_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.sinks.json).expect("read json sink");
        serde_json::from_str(&raw).expect("parse json sink")
    }

    pub fn read_csv(&self) -> String {
        std::fs::read_to_string(&self.sinks.csv).expect("read csv sink")
    }

    pub async fn usuario_count(&self) -> i64 {
        buzon::db::usuario::count(&self.pool).await.expect("count usuarios")
    }
}

/// Spawn a test app on a random port with freshly bootstrapped storage.
pub async fn spawn_app() -> TestApp {
    let storage = TempDir::new().expect("create temp storage dir");
    let data_dir = storage.path().join("datos");
    let database_path = storage.path().join("database").join("usuarios.db");

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        data_dir: data_dir.clone(),
        database_path: database_path.clone(),
        log_level: "warn".to_string(),
    };

    let sinks = SinkPaths::new(&data_dir);
    sinks.ensure().expect("bootstrap sink files");

    let pool = buzon::db::connect(&database_path)
        .await
        .expect("open test database");
    buzon::db::usuario::bootstrap(&pool)
        .await
        .expect("create tables");

    let app = buzon::build_app(pool.clone(), &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        pool,
        sinks,
        _storage: storage,
    }
}

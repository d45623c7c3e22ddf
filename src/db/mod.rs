pub mod request_log;

use std::path::Path;

use sqlx::SqlitePool;

/// Create the request log table if absent. Callers treat a failure as
/// non-fatal: the store stays degraded and later writes fail silently.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            endpoint TEXT NOT NULL,
            input_text TEXT NOT NULL,
            result TEXT NOT NULL,
            timestamp TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the SQLite file and its parent folder exist for a `sqlite://` URL,
/// so the pool can open it. In-memory URLs pass through untouched.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    let Some(path_part) = db_url.strip_prefix("sqlite://") else {
        return db_url.to_string();
    };
    if path_part == ":memory:" {
        return db_url.to_string();
    }

    let path_only = path_part.split_once('?').map_or(path_part, |(p, _)| p);
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new().create(true).append(true).open(p);
    }
    db_url.to_string()
}

use crate::errors::AppError;
use crate::models::{STORE_VERSION, StoredData};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/schedule.json"))
}

/// Loads the schedule blob. A missing, unreadable, malformed, or
/// wrong-version file all degrade to an empty store; every week then
/// resolves to its default. Never raises.
pub async fn load_data(path: &Path) -> StoredData {
    let mut data = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<StoredData>(&bytes) {
            Ok(data) if data.version == STORE_VERSION => data,
            Ok(data) => {
                error!(
                    "schedule file has unsupported version {}, starting empty",
                    data.version
                );
                StoredData::default()
            }
            Err(err) => {
                error!("failed to parse schedule file: {err}");
                StoredData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredData::default(),
        Err(err) => {
            error!("failed to read schedule file: {err}");
            StoredData::default()
        }
    };

    for week in data.weeks.values_mut() {
        week.schedule.normalize();
    }
    data
}

/// Serializes the full per-week mapping and overwrites the single blob.
pub async fn persist_data(path: &Path, data: &StoredData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

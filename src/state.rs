use crate::progress::ProgressBoard;
use crate::schedule::ScheduleStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared application state, built once at startup. The schedule store is
/// the only durable piece; the progress board lives for the process
/// lifetime so switching between the tracker and the settings view keeps
/// the session's completion flags.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<ScheduleStore>>,
    pub progress: Arc<Mutex<ProgressBoard>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: ScheduleStore) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            progress: Arc::new(Mutex::new(ProgressBoard::default())),
        }
    }
}

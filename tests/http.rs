use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Exercise {
    id: String,
    name: String,
    content: String,
    rounds: u32,
    icon: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekData {
    daily_exercises: Vec<Exercise>,
    mag_exercises: Vec<Exercise>,
    challenge_exercises: Vec<Exercise>,
    schedule: std::collections::BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ToggleDayResponse {
    day: String,
    assigned: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DayProgress {
    daily: bool,
    mag: bool,
    challenge: bool,
    rest: bool,
}

#[derive(Debug, Deserialize)]
struct DayRow {
    day: String,
    label: String,
    assigned: Vec<String>,
    icon: String,
    progress: DayProgress,
}

#[derive(Debug, Deserialize)]
struct WeekDaysResponse {
    week: u8,
    days: Vec<DayRow>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "trainings_app_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/week/1")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_trainings_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_week(client: &Client, base_url: &str, week: u8) -> WeekData {
    client
        .get(format!("{base_url}/api/week/{week}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_untouched_week_serves_starter_defaults() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let week = get_week(&client, &server.base_url, 9).await;
    assert_eq!(week.daily_exercises.len(), 3);
    assert_eq!(week.mag_exercises.len(), 3);
    assert_eq!(week.challenge_exercises.len(), 2);
    assert_eq!(week.schedule.get("söndag").unwrap(), &vec!["rest".to_string()]);
    assert_eq!(week.schedule.len(), 7);
}

#[tokio::test]
async fn http_week_out_of_range_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/week/11", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_added_exercise_shows_up_in_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let added: Exercise = client
        .post(format!("{}/api/week/3/exercise", server.base_url))
        .json(&serde_json::json!({
            "category": "mag",
            "name": "Sit-ups",
            "content": "Sit-ups 3×15",
            "rounds": 2
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(added.icon, "💪");

    let week = get_week(&client, &server.base_url, 3).await;
    let last = week.mag_exercises.last().unwrap();
    assert_eq!(last.id, added.id);
    assert_eq!(last.name, "Sit-ups");
    assert_eq!(last.content, "Sit-ups 3×15");
    assert_eq!(last.rounds, 2);
}

#[tokio::test]
async fn http_blank_exercise_name_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_week(&client, &server.base_url, 4).await;
    let response = client
        .post(format!("{}/api/week/4/exercise", server.base_url))
        .json(&serde_json::json!({
            "category": "daily",
            "name": "   ",
            "content": "något",
            "rounds": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let after = get_week(&client, &server.base_url, 4).await;
    assert_eq!(after.daily_exercises.len(), before.daily_exercises.len());
}

#[tokio::test]
async fn http_assigning_daily_on_rest_day_clears_rest() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: ToggleDayResponse = client
        .post(format!("{}/api/week/1/schedule/toggle", server.base_url))
        .json(&serde_json::json!({ "day": "söndag", "category": "daily" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.day, "söndag");
    assert_eq!(response.assigned, vec!["daily".to_string()]);
}

#[tokio::test]
async fn http_assigning_rest_clears_other_categories() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: ToggleDayResponse = client
        .post(format!("{}/api/week/1/schedule/toggle", server.base_url))
        .json(&serde_json::json!({ "day": "måndag", "category": "rest" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.assigned, vec!["rest".to_string()]);
}

#[tokio::test]
async fn http_removing_unknown_exercise_is_a_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let week: WeekData = client
        .delete(format!(
            "{}/api/week/2/exercise/challenge/nonexistent-id",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(week.challenge_exercises.len(), 2);
}

#[tokio::test]
async fn http_reorder_with_out_of_range_index_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/week/6/exercise/reorder", server.base_url))
        .json(&serde_json::json!({ "category": "daily", "from": 0, "to": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let week = get_week(&client, &server.base_url, 6).await;
    assert_eq!(week.daily_exercises[0].name, "Armhävningar");
}

#[tokio::test]
async fn http_completion_toggle_is_its_own_inverse() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let complete_url = format!("{}/api/week/5/day/tisdag/complete", server.base_url);
    let payload = serde_json::json!({ "category": "challenge" });

    let once: DayRow = client
        .post(&complete_url)
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(once.progress.challenge);
    assert_eq!(once.icon, "🔥");

    let twice: DayRow = client
        .post(&complete_url)
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!twice.progress.challenge);
    assert_eq!(twice.icon, "○");
    assert!(!twice.progress.rest);
}

#[tokio::test]
async fn http_tracker_rows_cover_all_days() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: WeekDaysResponse = client
        .get(format!("{}/api/week/8/days", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.week, 8);
    assert_eq!(response.days.len(), 7);
    assert_eq!(response.days[0].day, "måndag");

    let sunday = response.days.last().unwrap();
    assert_eq!(sunday.label, "Vilodag");
    assert_eq!(sunday.icon, "😴");
    assert!(sunday.assigned.contains(&"rest".to_string()));

    let monday = &response.days[0];
    assert_eq!(monday.icon, "○");
    assert!(!monday.progress.daily);
    assert!(!monday.progress.mag);
}

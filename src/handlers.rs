use crate::errors::AppError;
use crate::models::{
    AddExerciseRequest, Category, CompleteRequest, DayRow, Exercise, ReorderRequest,
    ToggleDayRequest, ToggleDayResponse, WEEK_MAX, WEEK_MIN, WeekData, WeekDaysResponse, Weekday,
};
use crate::progress::{DayProgress, display_icon};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_settings, render_tracker};
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};

pub async fn tracker() -> Html<String> {
    Html(render_tracker())
}

pub async fn settings() -> Html<String> {
    Html(render_settings())
}

pub async fn get_week(
    State(state): State<AppState>,
    Path(week): Path<u8>,
) -> Result<Json<WeekData>, AppError> {
    validate_week(week)?;
    let store = state.store.lock().await;
    Ok(Json(store.week(week)))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Path(week): Path<u8>,
    Json(payload): Json<AddExerciseRequest>,
) -> Result<Json<Exercise>, AppError> {
    validate_week(week)?;
    if payload.category == Category::Rest {
        return Err(AppError::bad_request("rest has no exercise catalog"));
    }

    let mut store = state.store.lock().await;
    let added = store
        .add_exercise(
            week,
            payload.category,
            &payload.name,
            &payload.content,
            payload.rounds,
        )
        .ok_or_else(|| {
            AppError::bad_request("name and content must be non-empty and rounds at least 1")
        })?;

    persist_data(&state.data_path, &store.snapshot()).await?;
    Ok(Json(added))
}

pub async fn remove_exercise(
    State(state): State<AppState>,
    Path((week, category, id)): Path<(u8, Category, String)>,
) -> Result<Json<WeekData>, AppError> {
    validate_week(week)?;

    let mut store = state.store.lock().await;
    if store.remove_exercise(week, category, &id) {
        persist_data(&state.data_path, &store.snapshot()).await?;
    }
    // A missing id is a normal case; respond with the (unchanged) week.
    Ok(Json(store.week(week)))
}

pub async fn reorder_exercise(
    State(state): State<AppState>,
    Path(week): Path<u8>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<WeekData>, AppError> {
    validate_week(week)?;

    let mut store = state.store.lock().await;
    if !store.reorder_exercise(week, payload.category, payload.from, payload.to) {
        return Err(AppError::bad_request("reorder index out of range"));
    }

    persist_data(&state.data_path, &store.snapshot()).await?;
    Ok(Json(store.week(week)))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Path(week): Path<u8>,
    Json(payload): Json<ToggleDayRequest>,
) -> Result<Json<ToggleDayResponse>, AppError> {
    validate_week(week)?;

    let mut store = state.store.lock().await;
    let assigned = store.toggle_day_category(week, payload.day, payload.category);
    persist_data(&state.data_path, &store.snapshot()).await?;

    Ok(Json(ToggleDayResponse {
        day: payload.day,
        assigned,
    }))
}

pub async fn week_days(
    State(state): State<AppState>,
    Path(week): Path<u8>,
) -> Result<Json<WeekDaysResponse>, AppError> {
    validate_week(week)?;

    let store = state.store.lock().await;
    let progress = state.progress.lock().await;
    let data = store.week(week);

    let days = Weekday::ALL
        .into_iter()
        .map(|day| day_row(&data, day, progress.day(week, day)))
        .collect();

    Ok(Json(WeekDaysResponse { week, days }))
}

pub async fn complete(
    State(state): State<AppState>,
    Path((week, day)): Path<(u8, Weekday)>,
    Json(payload): Json<CompleteRequest>,
) -> Result<Json<DayRow>, AppError> {
    validate_week(week)?;

    let store = state.store.lock().await;
    let data = store.week(week);
    let assigned = data.schedule.assigned(day);

    let mut progress = state.progress.lock().await;
    let updated = progress.toggle(week, day, payload.category, &assigned);

    Ok(Json(day_row(&data, day, updated)))
}

fn day_row(data: &WeekData, day: Weekday, progress: DayProgress) -> DayRow {
    let assigned = data.schedule.assigned(day);
    DayRow {
        day,
        label: day_label(&assigned),
        icon: display_icon(&assigned, progress),
        assigned,
        progress,
    }
}

/// Secondary line under the day name: "Vilodag" for rest days, otherwise
/// the non-daily category labels.
fn day_label(assigned: &std::collections::BTreeSet<Category>) -> String {
    if assigned.contains(&Category::Rest) {
        return Category::Rest.label().to_string();
    }
    assigned
        .iter()
        .filter(|category| **category != Category::Daily)
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_week(week: u8) -> Result<(), AppError> {
    if (WEEK_MIN..=WEEK_MAX).contains(&week) {
        Ok(())
    } else {
        Err(AppError::bad_request(format!(
            "week must be between {WEEK_MIN} and {WEEK_MAX}"
        )))
    }
}

use crate::models::{Category, Exercise, StoredData, WeekData, Weekday};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::watch;
use tracing::debug;

/// Canonical owner of the per-week configuration. Constructed once at
/// startup from the persisted blob and injected everywhere via `AppState`.
/// Reads are total: weeks that were never mutated resolve to the starter
/// week without being materialized in the map.
pub struct ScheduleStore {
    weeks: BTreeMap<u8, WeekData>,
    revision: u64,
    revision_tx: watch::Sender<u64>,
}

impl ScheduleStore {
    pub fn from_stored(data: StoredData) -> Self {
        let (revision_tx, _) = watch::channel(0);
        ScheduleStore {
            weeks: data.weeks,
            revision: 0,
            revision_tx,
        }
    }

    /// Full copy of the effective week: stored data if the week was ever
    /// mutated, the starter week otherwise. Always has all 7 days keyed.
    pub fn week(&self, week: u8) -> WeekData {
        match self.weeks.get(&week) {
            Some(data) => {
                let mut data = data.clone();
                data.schedule.normalize();
                data
            }
            None => WeekData::starter(),
        }
    }

    pub fn snapshot(&self) -> StoredData {
        StoredData {
            weeks: self.weeks.clone(),
            ..StoredData::default()
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Change feed: the receiver yields the store revision, bumped once per
    /// applied mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    /// Appends a new exercise to the week's catalog for `category`. Returns
    /// `None` without mutating anything when the category has no catalog,
    /// when name or content trims to empty, or when rounds is zero.
    pub fn add_exercise(
        &mut self,
        week: u8,
        category: Category,
        name: &str,
        content: &str,
        rounds: u32,
    ) -> Option<Exercise> {
        let name = name.trim();
        let content = content.trim();
        if name.is_empty() || content.is_empty() || rounds == 0 {
            return None;
        }

        self.mutate(week, |data| {
            let catalog = data.catalog_mut(category)?;
            let exercise = Exercise {
                id: next_exercise_id(catalog),
                name: name.to_string(),
                content: content.to_string(),
                rounds,
                icon: category.icon().to_string(),
            };
            catalog.push(exercise.clone());
            debug!(week, category = %category, name, "exercise added");
            Some(exercise)
        })
    }

    /// Removes the exercise with the given id. A missing id is a normal
    /// case: the catalog is left untouched and `false` is returned.
    pub fn remove_exercise(&mut self, week: u8, category: Category, id: &str) -> bool {
        self.mutate(week, |data| {
            let catalog = data.catalog_mut(category)?;
            let index = catalog.iter().position(|ex| ex.id == id)?;
            catalog.remove(index);
            debug!(week, category = %category, id, "exercise removed");
            Some(())
        })
        .is_some()
    }

    /// Moves the entry at `from` to position `to`, shifting the entries in
    /// between. Out-of-range indices reject the whole operation as a no-op.
    pub fn reorder_exercise(
        &mut self,
        week: u8,
        category: Category,
        from: usize,
        to: usize,
    ) -> bool {
        let len = match self.week(week).catalog(category) {
            Some(catalog) => catalog.len(),
            None => return false,
        };
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }

        self.mutate(week, |data| {
            let catalog = data.catalog_mut(category)?;
            let moved = catalog.remove(from);
            catalog.insert(to, moved);
            Some(())
        })
        .is_some()
    }

    /// Toggles `category` for the day. `rest` is exclusive: assigning it
    /// clears every other category, and assigning any other category clears
    /// `rest`. Returns the day's resulting set.
    pub fn toggle_day_category(
        &mut self,
        week: u8,
        day: Weekday,
        category: Category,
    ) -> BTreeSet<Category> {
        self.mutate(week, |data| {
            let set = data.schedule.assigned_mut(day);
            if category == Category::Rest {
                if set.contains(&Category::Rest) {
                    set.clear();
                } else {
                    set.clear();
                    set.insert(Category::Rest);
                }
            } else {
                set.remove(&Category::Rest);
                if !set.remove(&category) {
                    set.insert(category);
                }
            }
            debug!(week, day = %day, category = %category, "day schedule toggled");
            Some(set.clone())
        })
        .unwrap_or_default()
    }

    /// Applies `op` to a copy of the effective week and commits it only if
    /// the op reports a change. No-ops never materialize a default week.
    fn mutate<T>(&mut self, week: u8, op: impl FnOnce(&mut WeekData) -> Option<T>) -> Option<T> {
        let mut data = self.week(week);
        let out = op(&mut data)?;
        self.weeks.insert(week, data);
        self.revision += 1;
        let _ = self.revision_tx.send(self.revision);
        Some(out)
    }
}

/// Time-based id in the manner of `Date.now()`, bumped until unique within
/// the target catalog.
fn next_exercise_id(catalog: &[Exercise]) -> String {
    let mut candidate = Utc::now().timestamp_millis().max(0);
    while catalog.iter().any(|ex| ex.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

use crate::models::{Category, INCOMPLETE_GLYPH, Weekday};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Per-day completion flags. Session-only, never written to the schedule
/// store or to disk; everything resets to false on restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayProgress {
    pub daily: bool,
    pub mag: bool,
    pub challenge: bool,
    pub rest: bool,
}

impl DayProgress {
    pub fn completed(self, category: Category) -> bool {
        match category {
            Category::Daily => self.daily,
            Category::Mag => self.mag,
            Category::Challenge => self.challenge,
            Category::Rest => self.rest,
        }
    }

    fn flag_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Daily => &mut self.daily,
            Category::Mag => &mut self.mag,
            Category::Challenge => &mut self.challenge,
            Category::Rest => &mut self.rest,
        }
    }
}

/// In-memory completion state for the tracker, keyed by (week, day).
#[derive(Debug, Default)]
pub struct ProgressBoard {
    days: HashMap<(u8, Weekday), DayProgress>,
}

impl ProgressBoard {
    pub fn day(&self, week: u8, day: Weekday) -> DayProgress {
        self.days.get(&(week, day)).copied().unwrap_or_default()
    }

    /// Flips the completion flag for an assigned category. Toggles for
    /// categories outside the day's assignment are ignored; the tracker UI
    /// only renders controls for assigned categories anyway.
    pub fn toggle(
        &mut self,
        week: u8,
        day: Weekday,
        category: Category,
        assigned: &BTreeSet<Category>,
    ) -> DayProgress {
        if !assigned.contains(&category) {
            return self.day(week, day);
        }
        let progress = self.days.entry((week, day)).or_default();
        let flag = progress.flag_mut(category);
        *flag = !*flag;
        *progress
    }
}

/// Glyph shown next to a day: the rest glyph for rest days, the completed
/// category icons in fixed daily/mag/challenge order, or the placeholder
/// when nothing is done yet.
pub fn display_icon(assigned: &BTreeSet<Category>, progress: DayProgress) -> String {
    if assigned.contains(&Category::Rest) {
        return Category::Rest.icon().to_string();
    }

    let completed: Vec<&str> = Category::TRAINING
        .iter()
        .filter(|category| assigned.contains(category) && progress.completed(**category))
        .map(|category| category.icon())
        .collect();

    if completed.is_empty() {
        INCOMPLETE_GLYPH.to_string()
    } else {
        completed.join(" ")
    }
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

pub const WEEK_MIN: u8 = 1;
pub const WEEK_MAX: u8 = 10;
pub const STORE_VERSION: u32 = 1;
pub const INCOMPLETE_GLYPH: &str = "○";

/// Exercise-type tag assignable to a day. `Rest` excludes every other tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Daily,
    Mag,
    Challenge,
    Rest,
}

impl Category {
    /// The three categories that carry an exercise catalog, in display order.
    pub const TRAINING: [Category; 3] = [Category::Daily, Category::Mag, Category::Challenge];

    pub fn icon(self) -> &'static str {
        match self {
            Category::Daily => "🙌",
            Category::Mag => "💪",
            Category::Challenge => "🔥",
            Category::Rest => "😴",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Daily => "Dagligt",
            Category::Mag => "Mage",
            Category::Challenge => "Utmaning",
            Category::Rest => "Vilodag",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Daily => "daily",
            Category::Mag => "mag",
            Category::Challenge => "challenge",
            Category::Rest => "rest",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "daily" => Ok(Category::Daily),
            "mag" => Ok(Category::Mag),
            "challenge" => Ok(Category::Challenge),
            "rest" => Ok(Category::Rest),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Weekday keyed by its Swedish name, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "måndag")]
    Monday,
    #[serde(rename = "tisdag")]
    Tuesday,
    #[serde(rename = "onsdag")]
    Wednesday,
    #[serde(rename = "torsdag")]
    Thursday,
    #[serde(rename = "fredag")]
    Friday,
    #[serde(rename = "lördag")]
    Saturday,
    #[serde(rename = "söndag")]
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "måndag",
            Weekday::Tuesday => "tisdag",
            Weekday::Wednesday => "onsdag",
            Weekday::Thursday => "torsdag",
            Weekday::Friday => "fredag",
            Weekday::Saturday => "lördag",
            Weekday::Sunday => "söndag",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == value)
            .ok_or_else(|| format!("unknown weekday '{value}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub content: String,
    pub rounds: u32,
    pub icon: String,
}

/// Mapping of weekday to its assigned category set. All 7 days are keyed
/// once normalized; a day's set may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    days: BTreeMap<Weekday, BTreeSet<Category>>,
}

impl Default for DaySchedule {
    fn default() -> Self {
        let mut schedule = DaySchedule {
            days: BTreeMap::new(),
        };
        schedule.normalize();
        schedule
    }
}

impl DaySchedule {
    /// Inserts an empty set for any missing weekday.
    pub fn normalize(&mut self) {
        for day in Weekday::ALL {
            self.days.entry(day).or_default();
        }
    }

    pub fn assigned(&self, day: Weekday) -> BTreeSet<Category> {
        self.days.get(&day).cloned().unwrap_or_default()
    }

    pub fn assigned_mut(&mut self, day: Weekday) -> &mut BTreeSet<Category> {
        self.days.entry(day).or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekData {
    pub daily_exercises: Vec<Exercise>,
    pub mag_exercises: Vec<Exercise>,
    pub challenge_exercises: Vec<Exercise>,
    pub schedule: DaySchedule,
}

impl WeekData {
    /// The canonical starter week used for every week number that has not
    /// been configured yet. Never persisted until the week is first mutated.
    pub fn starter() -> Self {
        let mut schedule = DaySchedule::default();
        for day in Weekday::ALL {
            let set = schedule.assigned_mut(day);
            if day == Weekday::Sunday {
                set.insert(Category::Rest);
                continue;
            }
            set.insert(Category::Daily);
            if matches!(day, Weekday::Monday | Weekday::Wednesday | Weekday::Friday) {
                set.insert(Category::Mag);
            }
            if matches!(day, Weekday::Tuesday | Weekday::Thursday) {
                set.insert(Category::Challenge);
            }
        }

        WeekData {
            daily_exercises: starter_catalog(
                Category::Daily,
                &[
                    ("1", "Armhävningar", "3×10 armhävningar", 3),
                    ("2", "Plankan", "Håll plankan 60 sekunder", 3),
                    ("3", "Burpees", "15 burpees i jämn takt", 2),
                ],
            ),
            mag_exercises: starter_catalog(
                Category::Mag,
                &[
                    ("1", "Sit-ups", "Sit-ups 3×15", 3),
                    ("2", "Crunches", "Crunches 3×20", 3),
                    ("3", "Magcyklar", "Magcyklar 2×30", 2),
                ],
            ),
            challenge_exercises: starter_catalog(
                Category::Challenge,
                &[
                    ("1", "5km löpning", "Löp 5 km utan paus", 1),
                    ("2", "100 burpees", "100 burpees, valfri uppdelning", 1),
                ],
            ),
            schedule,
        }
    }

    pub fn catalog(&self, category: Category) -> Option<&Vec<Exercise>> {
        match category {
            Category::Daily => Some(&self.daily_exercises),
            Category::Mag => Some(&self.mag_exercises),
            Category::Challenge => Some(&self.challenge_exercises),
            Category::Rest => None,
        }
    }

    pub fn catalog_mut(&mut self, category: Category) -> Option<&mut Vec<Exercise>> {
        match category {
            Category::Daily => Some(&mut self.daily_exercises),
            Category::Mag => Some(&mut self.mag_exercises),
            Category::Challenge => Some(&mut self.challenge_exercises),
            Category::Rest => None,
        }
    }
}

fn starter_catalog(category: Category, entries: &[(&str, &str, &str, u32)]) -> Vec<Exercise> {
    entries
        .iter()
        .map(|(id, name, content, rounds)| Exercise {
            id: (*id).to_string(),
            name: (*name).to_string(),
            content: (*content).to_string(),
            rounds: *rounds,
            icon: category.icon().to_string(),
        })
        .collect()
}

/// On-disk blob: the full per-week mapping behind a version tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredData {
    pub version: u32,
    pub weeks: BTreeMap<u8, WeekData>,
}

impl Default for StoredData {
    fn default() -> Self {
        StoredData {
            version: STORE_VERSION,
            weeks: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    pub category: Category,
    pub name: String,
    pub content: String,
    pub rounds: u32,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub category: Category,
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize)]
pub struct ToggleDayRequest {
    pub day: Weekday,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct ToggleDayResponse {
    pub day: Weekday,
    pub assigned: BTreeSet<Category>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct DayRow {
    pub day: Weekday,
    pub label: String,
    pub assigned: BTreeSet<Category>,
    pub icon: String,
    pub progress: crate::progress::DayProgress,
}

#[derive(Debug, Serialize)]
pub struct WeekDaysResponse {
    pub week: u8,
    pub days: Vec<DayRow>,
}

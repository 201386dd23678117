//! Activity catalog: the named activities and their participant rosters.

use crate::error::AppError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory only. Signup does not check it.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Activities keyed by name, kept in insertion order.
///
/// Serializes as a JSON object `{name: Activity, ..}` in that order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: Vec<(String, Activity)>,
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for (name, activity) in &self.activities {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an activity, replacing any existing one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.activities.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.activities.push((name, activity)),
        }
    }

    pub fn list(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn get(&self, name: &str) -> Result<&Activity, AppError> {
        self.activities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
            .ok_or(AppError::NotFound)
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Activity, AppError> {
        self.activities
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
            .ok_or(AppError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// The fixed catalog the server starts with.
    pub fn seeded() -> Self {
        const SEED: &[(&str, &str, &str, u32, [&str; 2])] = &[
            (
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                ["michael@mergington.edu", "daniel@mergington.edu"],
            ),
            (
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
            (
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                ["john@mergington.edu", "olivia@mergington.edu"],
            ),
            (
                "Soccer Team",
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                ["liam@mergington.edu", "noah@mergington.edu"],
            ),
            (
                "Basketball Team",
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                ["ava@mergington.edu", "mia@mergington.edu"],
            ),
            (
                "Art Club",
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                ["amelia@mergington.edu", "harper@mergington.edu"],
            ),
            (
                "Drama Club",
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                ["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
            (
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                ["james@mergington.edu", "benjamin@mergington.edu"],
            ),
            (
                "Debate Team",
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                ["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ];

        let mut catalog = Self::new();
        for (name, description, schedule, max, participants) in SEED {
            catalog.insert(
                *name,
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            );
        }
        catalog
    }
}

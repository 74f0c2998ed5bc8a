/// HabitTracker: the collection of habits owned by one session
///
/// Habits are keyed by name. Each one also carries the sequence number of the
/// `add` call that created it, which fixes the display order.

use std::collections::HashMap;
use crate::domain::Habit;

/// A tracked habit together with its insertion sequence number
#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    habit: Habit,
}

/// Owns every habit in a session
#[derive(Debug, Default)]
pub struct HabitTracker {
    habits: HashMap<String, Slot>,
    next_seq: u64,
}

impl HabitTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a habit called `name`
    ///
    /// The name is stored exactly as given. Names that are blank after
    /// trimming and names that are already tracked are ignored.
    pub fn add(&mut self, name: &str) {
        if name.trim().is_empty() || self.habits.contains_key(name) {
            tracing::debug!("Ignoring add for {:?}", name);
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.habits.insert(
            name.to_string(),
            Slot {
                seq,
                habit: Habit::new(name.to_string()),
            },
        );
        tracing::debug!("Added habit '{}' (seq {})", name, seq);
    }

    /// Stop tracking `name` and drop its history; unknown names are ignored
    pub fn remove(&mut self, name: &str) {
        if self.habits.remove(name).is_some() {
            tracing::debug!("Removed habit '{}'", name);
        }
    }

    /// All habits in the order they were added
    pub fn get_all(&self) -> Vec<&Habit> {
        let mut slots: Vec<&Slot> = self.habits.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| &slot.habit).collect()
    }

    /// Look up a habit by its exact name
    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.get(name).map(|slot| &slot.habit)
    }

    /// Look up a habit by its exact name for marking or unmarking
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Habit> {
        self.habits.get_mut(name).map(|slot| &mut slot.habit)
    }

    /// Check whether a habit with this exact name is tracked
    pub fn contains(&self, name: &str) -> bool {
        self.habits.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

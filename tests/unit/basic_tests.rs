/// Unit tests for the habit tracking model through the public API
use chrono::NaiveDate;
use habit_tracker::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn jan1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn names(tracker: &HabitTracker) -> Vec<String> {
        tracker.get_all().iter().map(|h| h.name().to_string()).collect()
    }

    #[test]
    fn test_two_new_habits_start_empty() {
        let mut tracker = HabitTracker::new();
        tracker.add("Exercise");
        tracker.add("Read");

        let all = tracker.get_all();
        assert_eq!(names(&tracker), vec!["Exercise", "Read"]);
        assert!(all.iter().all(|h| h.count_done() == 0));
    }

    #[test]
    fn test_mark_done_scenario() {
        let mut tracker = HabitTracker::new();
        tracker.add("Exercise");

        tracker.get_mut("Exercise").unwrap().mark_done(jan1());

        let habit = tracker.get("Exercise").unwrap();
        assert!(habit.is_done(jan1()));
        assert_eq!(habit.count_done(), 1);
    }

    #[test]
    fn test_adding_same_name_twice() {
        let mut tracker = HabitTracker::new();
        tracker.add("Exercise");
        tracker.add("Exercise");

        assert_eq!(tracker.get_all().len(), 1);
    }

    #[test]
    fn test_count_tracks_distinct_marked_days() {
        let mut tracker = HabitTracker::new();
        tracker.add("Read");
        let habit = tracker.get_mut("Read").unwrap();

        let days: Vec<NaiveDate> = (0..10)
            .map(|offset| jan1() + chrono::Duration::days(offset))
            .collect();
        for day in &days {
            habit.mark_done(*day);
            habit.mark_done(*day);
        }
        for day in days.iter().step_by(3) {
            habit.unmark_done(*day);
        }

        // Days 0, 3, 6 and 9 were unmarked
        assert_eq!(habit.count_done(), 6);
        assert!(!habit.is_done(days[3]));
        assert!(habit.is_done(days[4]));
    }

    #[test]
    fn test_remove_unknown_leaves_collection() {
        let mut tracker = HabitTracker::new();
        tracker.add("Exercise");
        tracker.remove("Read");

        assert_eq!(names(&tracker), vec!["Exercise"]);
    }

    #[test]
    fn test_summary_through_session() {
        let mut session = Session::new(Some(jan1()));
        session.tracker_mut().add("Exercise");
        session.tracker_mut().add("Read");
        session.tracker_mut().get_mut("Read").unwrap().mark_done(jan1());

        let summary = Summary::compute(session.tracker(), session.today());

        assert_eq!(summary.total_habits, 2);
        assert_eq!(summary.completed_on_day, 1);
    }

    #[test]
    fn test_validation_helpers() {
        assert!(validate_habit_name(" ").is_err());
        assert_eq!(parse_day("2024-01-01"), Ok(jan1()));
    }
}

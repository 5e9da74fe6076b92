//! Flags workers who have missed the last few days in a row.
use crate::data::{AttendanceTable, Day, Mark, Worker};

/// Number of consecutive days, counting back from yesterday, that a worker
/// must be effectively absent to be flagged.
pub const WINDOW_DAYS: i64 = 3;

/// Returns the workers effectively absent on each of the [`WINDOW_DAYS`] days
/// before `today`, in roster order.
///
/// A day with no entries at all, or a worker with no entry on a day, counts as
/// absent. `today` itself is never inspected.
pub fn flagged_workers<'r>(table: &AttendanceTable, roster: &'r [Worker], today: Day) -> Vec<&'r Worker> {
	let window = (1..=WINDOW_DAYS)
		.map(|offset| today.days_before(offset).and_then(|day| table.day(&day)))
		.collect::<Vec<_>>();
	roster
		.iter()
		.filter(|worker| {
			window.iter().all(|entries| {
				let status = entries.and_then(|entries| entries.get(&worker.id)).copied();
				Mark::from(status).is_effectively_absent()
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{AttendanceStatus, DayEntries};
	use time::macros::date;

	fn today() -> Day {
		Day::from(date!(2026 - 10 - 17))
	}

	fn ago(days: i64) -> Day {
		today().days_before(days).unwrap()
	}

	fn roster() -> Vec<Worker> {
		vec![
			Worker::new("W1", "Ana Cruz", "Mason"),
			Worker::new("W2", "Ben Okafor", "Welder"),
		]
	}

	fn ids(flagged: Vec<&Worker>) -> Vec<&str> {
		flagged.into_iter().map(|worker| worker.id.as_str()).collect()
	}

	#[test]
	fn empty_table_flags_everyone() {
		let roster = roster();
		let flagged = flagged_workers(&AttendanceTable::default(), &roster, today());
		assert_eq!(ids(flagged), vec!["W1", "W2"]);
	}

	#[test]
	fn empty_roster_flags_nobody() {
		assert!(flagged_workers(&AttendanceTable::default(), &[], today()).is_empty());
	}

	#[test]
	fn three_recorded_absences_flag_the_worker() {
		let roster = roster();
		let mut table = AttendanceTable::default();
		for offset in 1..=3 {
			table.set(ago(offset), "W1", AttendanceStatus::Absent);
			table.set(ago(offset), "W2", AttendanceStatus::Present);
		}
		assert_eq!(ids(flagged_workers(&table, &roster, today())), vec!["W1"]);

		table.set(ago(1), "W1", AttendanceStatus::Present);
		assert!(flagged_workers(&table, &roster, today()).is_empty());
	}

	#[test]
	fn missing_worker_entries_count_as_absent() {
		// W2 has no entries anywhere and must be flagged alongside W1
		let roster = roster();
		let mut table = AttendanceTable::default();
		for offset in 1..=3 {
			table.set(ago(offset), "W1", AttendanceStatus::Absent);
		}
		assert_eq!(ids(flagged_workers(&table, &roster, today())), vec!["W1", "W2"]);
	}

	#[test]
	fn an_empty_day_counts_as_absent() {
		let roster = roster();
		let table = [(ago(1), DayEntries::new())].into_iter().collect::<AttendanceTable>();
		assert_eq!(ids(flagged_workers(&table, &roster, today())), vec!["W1", "W2"]);
	}

	#[test]
	fn one_present_day_anywhere_in_the_window_clears_the_flag() {
		let roster = roster();
		for present_on in 1..=3 {
			let mut table = AttendanceTable::default();
			for offset in 1..=3 {
				let status = match offset == present_on {
					true => AttendanceStatus::Present,
					false => AttendanceStatus::Absent,
				};
				table.set(ago(offset), "W1", status);
			}
			assert_eq!(ids(flagged_workers(&table, &roster, today())), vec!["W2"], "present on day -{present_on}");
		}
	}

	#[test]
	fn only_the_three_preceding_days_are_inspected() {
		let roster = roster();
		let mut table = AttendanceTable::default();
		// presence today and four days ago lies outside the window
		table.set(today(), "W1", AttendanceStatus::Present);
		table.set(ago(4), "W1", AttendanceStatus::Present);
		assert_eq!(ids(flagged_workers(&table, &roster, today())), vec!["W1", "W2"]);
	}

	#[test]
	fn keeps_roster_order_without_duplicates() {
		let roster = vec![
			Worker::new("W3", "Cy", "Carpenter"),
			Worker::new("W1", "Ana", "Mason"),
			Worker::new("W2", "Ben", "Welder"),
		];
		let mut table = AttendanceTable::default();
		table.set(ago(2), "W1", AttendanceStatus::Present);
		assert_eq!(ids(flagged_workers(&table, &roster, today())), vec!["W3", "W2"]);
	}

	#[test]
	fn the_window_crosses_month_boundaries() {
		let roster = roster();
		let today = Day::from(date!(2026 - 03 - 01));
		let mut table = AttendanceTable::default();
		table.set(Day::from(date!(2026 - 02 - 26)), "W1", AttendanceStatus::Present);
		assert_eq!(ids(flagged_workers(&table, &roster, today)), vec!["W2"]);
	}
}

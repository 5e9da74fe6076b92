use super::{Day, Worker};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recorded status. Stored as the single-letter codes `"P"` and `"A"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
	#[serde(rename = "P")]
	Present,
	#[serde(rename = "A")]
	Absent,
}

impl AttendanceStatus {
	pub fn code(self) -> &'static str {
		match self {
			Self::Present => "P",
			Self::Absent => "A",
		}
	}
}

/// The resolved status of a worker on a given day.
///
/// Unlike [`AttendanceStatus`], this includes `NotMarked` for workers with no
/// recorded entry, so a lookup miss is never confused with a real value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, enum_map::Enum)]
pub enum Mark {
	Present,
	Absent,
	NotMarked,
}

impl Mark {
	pub fn label(self) -> &'static str {
		match self {
			Self::Present => "Present",
			Self::Absent => "Absent",
			Self::NotMarked => "Not Marked",
		}
	}

	/// Counted as absent by the consecutive-absence rule.
	pub fn is_effectively_absent(self) -> bool {
		!matches!(self, Self::Present)
	}

	/// Bootstrap contextual color used for badges.
	pub fn tone(self) -> &'static str {
		match self {
			Self::Present => "success",
			Self::Absent => "danger",
			Self::NotMarked => "secondary",
		}
	}
}

impl From<AttendanceStatus> for Mark {
	fn from(status: AttendanceStatus) -> Self {
		match status {
			AttendanceStatus::Present => Self::Present,
			AttendanceStatus::Absent => Self::Absent,
		}
	}
}

impl From<Option<AttendanceStatus>> for Mark {
	fn from(status: Option<AttendanceStatus>) -> Self {
		status.map(Self::from).unwrap_or(Self::NotMarked)
	}
}

/// Statuses recorded for one day, keyed by worker id.
pub type DayEntries = BTreeMap<String, AttendanceStatus>;

/// Every recorded status, keyed by day and then by worker id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceTable(BTreeMap<Day, DayEntries>);

impl AttendanceTable {
	pub fn day(&self, day: &Day) -> Option<&DayEntries> {
		self.0.get(day)
	}

	pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
		self.0.keys()
	}

	pub fn status(&self, day: &Day, worker_id: &str) -> Option<AttendanceStatus> {
		self.day(day).and_then(|entries| entries.get(worker_id)).copied()
	}

	pub fn mark(&self, day: &Day, worker_id: &str) -> Mark {
		self.status(day, worker_id).into()
	}

	/// Records one status, replacing any earlier value for that worker and day.
	pub fn set(&mut self, day: Day, worker_id: impl Into<String>, status: AttendanceStatus) {
		self.0.entry(day).or_default().insert(worker_id.into(), status);
	}

	/// Records the same status for every worker in `workers` on `day`.
	pub fn set_all<'w>(&mut self, day: Day, workers: impl IntoIterator<Item = &'w Worker>, status: AttendanceStatus) {
		let entries = self.0.entry(day).or_default();
		for worker in workers {
			entries.insert(worker.id.clone(), status);
		}
	}
}

impl FromIterator<(Day, DayEntries)> for AttendanceTable {
	fn from_iter<T: IntoIterator<Item = (Day, DayEntries)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::macros::date;

	fn day() -> Day {
		Day::from(date!(2026 - 10 - 17))
	}

	#[test]
	fn missing_entries_are_not_marked() {
		let mut table = AttendanceTable::default();
		assert_eq!(table.mark(&day(), "W1"), Mark::NotMarked);
		table.set(day(), "W2", AttendanceStatus::Present);
		assert_eq!(table.mark(&day(), "W1"), Mark::NotMarked);
		assert_eq!(table.mark(&day(), "W2"), Mark::Present);
	}

	#[test]
	fn last_write_wins() {
		let mut table = AttendanceTable::default();
		table.set(day(), "W1", AttendanceStatus::Present);
		table.set(day(), "W1", AttendanceStatus::Absent);
		assert_eq!(table.status(&day(), "W1"), Some(AttendanceStatus::Absent));
		assert_eq!(table.day(&day()).map(|entries| entries.len()), Some(1));
	}

	#[test]
	fn set_all_overwrites_only_that_day() {
		let roster = vec![Worker::new("W1", "Ana", "Mason"), Worker::new("W2", "Ben", "Welder")];
		let other = Day::from(date!(2026 - 10 - 16));
		let mut table = AttendanceTable::default();
		table.set(day(), "W1", AttendanceStatus::Absent);
		table.set(other, "W1", AttendanceStatus::Absent);

		table.set_all(day(), &roster, AttendanceStatus::Present);

		assert_eq!(table.mark(&day(), "W1"), Mark::Present);
		assert_eq!(table.mark(&day(), "W2"), Mark::Present);
		assert_eq!(table.mark(&other, "W1"), Mark::Absent);
		assert_eq!(table.mark(&other, "W2"), Mark::NotMarked);
	}

	#[test]
	fn stored_with_status_codes() {
		let mut table = AttendanceTable::default();
		table.set(day(), "W1", AttendanceStatus::Present);
		table.set(day(), "W2", AttendanceStatus::Absent);
		let json = serde_json::to_string(&table).unwrap();
		assert_eq!(json, r#"{"2026-10-17":{"W1":"P","W2":"A"}}"#);
		assert_eq!(serde_json::from_str::<AttendanceTable>(&json).unwrap(), table);
	}

	#[test]
	fn unknown_status_codes_are_rejected() {
		assert!(serde_json::from_str::<AttendanceTable>(r#"{"2026-10-17":{"W1":"X"}}"#).is_err());
	}
}

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::{format_description::FormatItem, macros::format_description, Date, Duration};

static ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A calendar date, keyed and displayed as ISO `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(Date);

impl Day {
	/// The browser's (or host's) local calendar date.
	pub fn today() -> Self {
		Self(crate::util::local_today())
	}

	pub fn date(&self) -> Date {
		self.0
	}

	/// The date `days` calendar days earlier, or None if it falls before the
	/// earliest representable date.
	pub fn days_before(&self, days: i64) -> Option<Self> {
		self.0.checked_sub(Duration::days(days)).map(Self)
	}
}

impl From<Date> for Day {
	fn from(date: Date) -> Self {
		Self(date)
	}
}

impl std::fmt::Display for Day {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let text = self.0.format(ISO_DATE).map_err(|_| std::fmt::Error)?;
		f.write_str(&text)
	}
}

impl FromStr for Day {
	type Err = time::error::Parse;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let date = Date::parse(s.trim(), ISO_DATE)?;
		Ok(Self(date))
	}
}

impl Serialize for Day {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Day {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		text.parse().map_err(D::Error::custom)
	}
}

use super::Mark;
use enum_map::EnumMap;

/// How many roster workers fall under each [`Mark`] on one day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary(EnumMap<Mark, usize>);

impl Summary {
	pub fn tally(marks: impl IntoIterator<Item = Mark>) -> Self {
		let mut counts = EnumMap::default();
		for mark in marks {
			counts[mark] += 1;
		}
		Self(counts)
	}

	pub fn count(&self, mark: Mark) -> usize {
		self.0[mark]
	}

	pub fn total(&self) -> usize {
		self.0.values().sum()
	}

	pub fn iter(&self) -> impl Iterator<Item = (Mark, usize)> + '_ {
		self.0.iter().map(|(mark, count)| (mark, *count))
	}
}

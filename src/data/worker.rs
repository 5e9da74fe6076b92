use serde::{Deserialize, Serialize};

/// A person on the site roster who gets marked each day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
	pub id: String,
	pub name: String,
	pub trade: String,
}

impl Worker {
	pub fn new(id: impl Into<String>, name: impl Into<String>, trade: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			trade: trade.into(),
		}
	}
}

/// The ordered list of workers eligible for marking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(pub Vec<Worker>);

impl std::ops::Deref for Roster {
	type Target = [Worker];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Worker>> for Roster {
	fn from(workers: Vec<Worker>) -> Self {
		Self(workers)
	}
}

/// Whoever is logged in and doing the marking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
	pub id: String,
	pub name: String,
}

impl Supervisor {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
		}
	}
}

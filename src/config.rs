use crate::data::{Supervisor, Worker};

/// Shown in the header and on every report. Set `SITE_NAME` at build time to override.
pub static SITE_NAME: &str = match option_env!("SITE_NAME") {
	Some(name) => name,
	None => "Harbourview Tower, Block B",
};

/// Prefix for every record this app keeps in local storage.
pub static STORAGE_PREFIX: &str = "site-attendance";

/// How long a notification stays on screen.
pub static TOAST_MILLIS: u32 = 3500;

/// Supervisors offered by the login picker.
static SUPERVISORS: &[(&str, &str)] = &[
	("S1", "Maria Lopez"),
	("S2", "Daniel Mensah"),
	("S3", "Priya Raman"),
];

/// Roster seeded into storage the first time the app opens.
static DEFAULT_ROSTER: &[(&str, &str, &str)] = &[
	("W1", "Rahul Verma", "Mason"),
	("W2", "Tomasz Nowak", "Carpenter"),
	("W3", "Aisha Bello", "Electrician"),
	("W4", "Juan Herrera", "Steel Fixer"),
	("W5", "Chen Wei", "Plumber"),
	("W6", "Samuel Osei", "Welder"),
	("W7", "Lena Fischer", "Crane Operator"),
	("W8", "Arjun Singh", "Labourer"),
];

pub fn supervisors() -> Vec<Supervisor> {
	SUPERVISORS.iter().map(|(id, name)| Supervisor::new(*id, *name)).collect()
}

pub fn default_roster() -> Vec<Worker> {
	DEFAULT_ROSTER
		.iter()
		.map(|(id, name, trade)| Worker::new(*id, *name, *trade))
		.collect()
}

/// Geometry of the exported document, in millimetres (A4 portrait).
pub mod document {
	pub static WIDTH_MM: f32 = 210.0;
	pub static HEIGHT_MM: f32 = 297.0;
	pub static MARGIN_MM: f32 = 12.0;
	/// Body text size before the table is scaled to fit the printable width.
	pub static BASE_FONT_PT: f32 = 11.0;
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeSet;

	#[test]
	fn configured_ids_are_unique() {
		let workers = default_roster();
		let ids = workers.iter().map(|worker| worker.id.as_str()).collect::<BTreeSet<_>>();
		assert_eq!(ids.len(), workers.len());

		let supervisors = supervisors();
		let ids = supervisors.iter().map(|supervisor| supervisor.id.as_str()).collect::<BTreeSet<_>>();
		assert_eq!(ids.len(), supervisors.len());
	}
}

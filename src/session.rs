//! The one owner of mutable app state.
//!
//! [`Session`] holds the logged-in supervisor, the roster, the attendance
//! table and the date being edited. Every mutation writes the affected record
//! straight through to storage; a failed write is logged and otherwise ignored.
//! Components reach the session through [`SessionHandle`], provided by
//! [`Provider`].
use crate::{
	absence,
	data::{AttendanceStatus, AttendanceTable, Day, Mark, Roster, Summary, Supervisor, Worker},
	report::Report,
	storage::{KeyValueStore, Record},
};
use derivative::Derivative;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Derivative)]
#[derivative(PartialEq, Debug)]
pub struct Session {
	#[derivative(PartialEq = "ignore", Debug = "ignore")]
	store: Rc<dyn KeyValueStore>,
	supervisor: Option<Supervisor>,
	roster: Roster,
	attendance: AttendanceTable,
	selected: Day,
}

impl Session {
	/// Reads all three records, falling back to the configured roster, an
	/// empty table and nobody logged in. A missing roster is seeded into
	/// storage right away so it can be edited there; an unreadable one is left
	/// as it is for the user to repair.
	pub fn load(store: Rc<dyn KeyValueStore>, today: Day) -> Self {
		let default_roster = || Roster(crate::config::default_roster());
		let (roster, seeded) = match Roster::load(&*store) {
			Ok(Some(roster)) => (roster, false),
			Ok(None) => (default_roster(), true),
			Err(err) => {
				log::warn!(target: "storage", "{err}; using the configured roster until it is fixed");
				(default_roster(), false)
			}
		};
		let attendance = AttendanceTable::load_or_else(&*store, AttendanceTable::default);
		let supervisor = match Supervisor::load(&*store) {
			Ok(supervisor) => supervisor,
			Err(err) => {
				log::warn!(target: "storage", "{err}; starting logged out");
				None
			}
		};
		let session = Self {
			store,
			supervisor,
			roster,
			attendance,
			selected: today,
		};
		if seeded {
			session.persist(&session.roster);
		}
		session
	}

	pub fn supervisor(&self) -> Option<&Supervisor> {
		self.supervisor.as_ref()
	}

	pub fn roster(&self) -> &[Worker] {
		&self.roster
	}

	pub fn attendance(&self) -> &AttendanceTable {
		&self.attendance
	}

	pub fn selected_date(&self) -> Day {
		self.selected
	}

	pub fn login(&mut self, supervisor: Supervisor) {
		log::info!(target: "session", "{} logged in", supervisor.name);
		self.persist(&supervisor);
		self.supervisor = Some(supervisor);
	}

	/// Forgets the supervisor. Attendance records are kept.
	pub fn logout(&mut self) {
		if let Some(supervisor) = self.supervisor.take() {
			log::info!(target: "session", "{} logged out", supervisor.name);
		}
		Supervisor::delete(&*self.store);
	}

	pub fn mark_one(&mut self, worker_id: &str, status: AttendanceStatus, day: Day) {
		self.attendance.set(day, worker_id, status);
		log::debug!(target: "session", "marked {worker_id} {} on {day}", status.code());
		self.persist(&self.attendance);
	}

	pub fn mark_all(&mut self, status: AttendanceStatus, day: Day) {
		self.attendance.set_all(day, self.roster.iter(), status);
		log::debug!(target: "session", "marked all {} workers {} on {day}", self.roster.len(), status.code());
		self.persist(&self.attendance);
	}

	/// Changes which day is shown and edited. Nothing is written.
	pub fn set_selected_date(&mut self, day: Day) {
		self.selected = day;
	}

	pub fn mark(&self, worker_id: &str, day: &Day) -> Mark {
		self.attendance.mark(day, worker_id)
	}

	pub fn summary(&self, day: &Day) -> Summary {
		Summary::tally(self.roster.iter().map(|worker| self.mark(&worker.id, day)))
	}

	/// Workers missing on each of the three days before `today`.
	pub fn flagged(&self, today: Day) -> Vec<&Worker> {
		absence::flagged_workers(&self.attendance, &self.roster, today)
	}

	pub fn report(&self, day: Day) -> Report {
		Report::build(
			crate::config::SITE_NAME,
			self.supervisor.as_ref(),
			&self.roster,
			&self.attendance,
			day,
		)
	}

	fn persist<R: Record>(&self, record: &R) {
		if let Err(err) = record.save(&*self.store) {
			log::warn!(target: "storage", "{err}");
		}
	}

	fn apply(&mut self, action: Action) {
		match action {
			Action::Login(supervisor) => self.login(supervisor),
			Action::Logout => self.logout(),
			Action::MarkOne { worker_id, status, day } => self.mark_one(&worker_id, status, day),
			Action::MarkAll { status, day } => self.mark_all(status, day),
			Action::SelectDate(day) => self.set_selected_date(day),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	Login(Supervisor),
	Logout,
	MarkOne {
		worker_id: String,
		status: AttendanceStatus,
		day: Day,
	},
	MarkAll {
		status: AttendanceStatus,
		day: Day,
	},
	SelectDate(Day),
}

impl Reducible for Session {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut session = (*self).clone();
		session.apply(action);
		match session != *self {
			true => Rc::new(session),
			false => self,
		}
	}
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle(UseReducerHandle<Session>);
impl std::ops::Deref for SessionHandle {
	type Target = UseReducerHandle<Session>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl SessionHandle {
	pub fn login(&self, supervisor: Supervisor) {
		self.dispatch(Action::Login(supervisor));
	}

	pub fn logout(&self) {
		self.dispatch(Action::Logout);
	}

	pub fn mark_one(&self, worker_id: impl Into<String>, status: AttendanceStatus, day: Day) {
		self.dispatch(Action::MarkOne {
			worker_id: worker_id.into(),
			status,
			day,
		});
	}

	pub fn mark_all(&self, status: AttendanceStatus, day: Day) {
		self.dispatch(Action::MarkAll { status, day });
	}

	pub fn set_selected_date(&self, day: Day) {
		self.dispatch(Action::SelectDate(day));
	}
}

#[function_component]
pub fn Provider(props: &html::ChildrenProps) -> Html {
	let session = use_reducer(|| {
		let today = Day::today();
		log::info!(target: "session", "loading attendance records, today is {today}");
		Session::load(crate::storage::open(), today)
	});
	html! {
		<ContextProvider<SessionHandle> context={SessionHandle(session)}>
			{props.children.clone()}
		</ContextProvider<SessionHandle>>
	}
}

#[hook]
pub fn use_session() -> SessionHandle {
	use_context::<SessionHandle>().expect("use_session called outside of session::Provider")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;
	use time::macros::date;

	fn today() -> Day {
		Day::from(date!(2026 - 10 - 17))
	}

	fn roster() -> Roster {
		Roster(vec![
			Worker::new("W1", "Ana Cruz", "Mason"),
			Worker::new("W2", "Ben Okafor", "Welder"),
		])
	}

	fn session_with(store: MemoryStore) -> (Rc<MemoryStore>, Session) {
		let store = Rc::new(store);
		let session = Session::load(store.clone(), today());
		(store, session)
	}

	fn seeded() -> (Rc<MemoryStore>, Session) {
		let store = MemoryStore::default();
		roster().save(&store).unwrap();
		session_with(store)
	}

	#[test]
	fn first_start_seeds_the_configured_roster() {
		let (store, session) = session_with(MemoryStore::default());
		assert_eq!(session.roster(), crate::config::default_roster().as_slice());
		assert_eq!(session.attendance(), &AttendanceTable::default());
		assert_eq!(session.supervisor(), None);
		assert_eq!(session.selected_date(), today());
		assert_eq!(Roster::load(&*store).unwrap().map(|roster| roster.len()), Some(session.roster().len()));
	}

	#[test]
	fn corrupted_records_load_as_defaults() {
		let store = MemoryStore::default()
			.with_entry(AttendanceTable::key(), "[1, 2")
			.with_entry(Supervisor::key(), "42");
		let (_, session) = session_with(store);
		assert_eq!(session.attendance(), &AttendanceTable::default());
		assert_eq!(session.supervisor(), None);
		assert!(!session.roster().is_empty());
	}

	#[test]
	fn corrupted_roster_is_not_overwritten_on_load() {
		let (store, session) = session_with(MemoryStore::default().with_entry(Roster::key(), "{bad"));
		assert_eq!(session.roster(), crate::config::default_roster().as_slice());
		assert_eq!(store.raw(&Roster::key()).as_deref(), Some("{bad"));
	}

	#[test]
	fn login_and_logout_are_persisted() {
		let (store, mut session) = seeded();
		let supervisor = Supervisor::new("S1", "Maria Lopez");
		session.login(supervisor.clone());
		assert_eq!(session.supervisor(), Some(&supervisor));
		assert_eq!(Supervisor::load(&*store), Ok(Some(supervisor)));

		session.mark_one("W1", AttendanceStatus::Present, today());
		session.logout();
		assert_eq!(session.supervisor(), None);
		assert_eq!(Supervisor::load(&*store), Ok(None));
		assert_eq!(session.mark("W1", &today()), Mark::Present);
	}

	#[test]
	fn mark_one_touches_a_single_entry() {
		let (_, mut session) = seeded();
		session.mark_one("W1", AttendanceStatus::Absent, today());
		assert_eq!(session.mark("W1", &today()), Mark::Absent);
		assert_eq!(session.mark("W2", &today()), Mark::NotMarked);
		assert_eq!(session.attendance().days().count(), 1);
	}

	#[test]
	fn last_mark_wins() {
		let (store, mut session) = seeded();
		session.mark_one("W1", AttendanceStatus::Present, today());
		session.mark_one("W1", AttendanceStatus::Absent, today());
		assert_eq!(session.mark("W1", &today()), Mark::Absent);
		let stored = AttendanceTable::load(&*store).unwrap().unwrap();
		assert_eq!(stored.status(&today(), "W1"), Some(AttendanceStatus::Absent));
	}

	#[test]
	fn mark_all_covers_the_roster_on_one_day_only() {
		let (_, mut session) = seeded();
		let yesterday = today().days_before(1).unwrap();
		session.mark_one("W2", AttendanceStatus::Absent, today());
		session.mark_all(AttendanceStatus::Present, today());
		for worker in session.roster() {
			assert_eq!(session.mark(&worker.id, &today()), Mark::Present);
			assert_eq!(session.mark(&worker.id, &yesterday), Mark::NotMarked);
		}
		assert_eq!(session.attendance().days().collect::<Vec<_>>(), vec![&today()]);
	}

	#[test]
	fn selecting_a_date_writes_nothing() {
		let (store, mut session) = seeded();
		let future = Day::from(date!(2030 - 01 - 01));
		session.set_selected_date(future);
		assert_eq!(session.selected_date(), future);
		assert_eq!(store.raw(&AttendanceTable::key()), None);
		assert_eq!(session.summary(&future).count(Mark::NotMarked), 2);
	}

	#[test]
	fn state_reloads_from_storage() {
		let (store, mut session) = seeded();
		session.login(Supervisor::new("S2", "Daniel Mensah"));
		session.mark_all(AttendanceStatus::Absent, today());
		session.mark_one("W2", AttendanceStatus::Present, today());

		let reloaded = Session::load(store, today());
		assert_eq!(reloaded, session);
	}

	#[test]
	fn failed_writes_do_not_block_changes() {
		let (_, mut session) = session_with(MemoryStore::read_only());
		session.login(Supervisor::new("S1", "Maria Lopez"));
		session.mark_all(AttendanceStatus::Present, today());
		assert!(session.supervisor().is_some());
		assert_eq!(session.summary(&today()).count(Mark::Present), session.roster().len());
	}

	#[test]
	fn flags_use_the_given_today_not_the_selected_date() {
		let (_, mut session) = seeded();
		for offset in 1..=3 {
			session.mark_one("W2", AttendanceStatus::Present, today().days_before(offset).unwrap());
		}
		session.set_selected_date(today().days_before(10).unwrap());
		let flagged = session.flagged(today()).into_iter().map(|worker| worker.id.clone()).collect::<Vec<_>>();
		assert_eq!(flagged, vec!["W1".to_owned()]);
	}

	#[test]
	fn reducer_keeps_the_same_state_for_no_op_actions() {
		let (_, session) = seeded();
		let session = Rc::new(session);
		let same = session.clone().reduce(Action::SelectDate(today()));
		assert!(Rc::ptr_eq(&session, &same));

		let changed = session.clone().reduce(Action::MarkAll {
			status: AttendanceStatus::Present,
			day: today(),
		});
		assert!(!Rc::ptr_eq(&session, &changed));
		assert_eq!(changed.summary(&today()).count(Mark::Present), 2);
	}

	#[test]
	fn report_uses_the_logged_in_supervisor() {
		let (_, mut session) = seeded();
		session.login(Supervisor::new("S3", "Priya Raman"));
		let report = session.report(today());
		assert_eq!(report.supervisor, "Priya Raman");
		assert_eq!(report.site, crate::config::SITE_NAME);
		assert_eq!(report.rows.len(), 2);
	}
}

use crate::data::{AttendanceTable, Day, Mark, Summary, Supervisor, Worker};
use itertools::Itertools;

/// The daily attendance report for one date, as shown on screen and exported.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
	pub site: String,
	pub supervisor: String,
	pub date: Day,
	pub rows: Vec<ReportRow>,
	pub summary: Summary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
	/// 1-based position in the roster.
	pub number: usize,
	pub name: String,
	pub trade: String,
	pub mark: Mark,
}

impl ReportRow {
	pub fn cells(&self) -> [String; 4] {
		[
			self.number.to_string(),
			self.name.clone(),
			self.trade.clone(),
			self.mark.label().to_owned(),
		]
	}
}

impl Report {
	pub const TITLE: &'static str = "Daily Attendance Report";
	pub const COLUMNS: [&'static str; 4] = ["#", "Name", "Trade", "Status"];

	pub fn build(
		site: impl Into<String>,
		supervisor: Option<&Supervisor>,
		roster: &[Worker],
		table: &AttendanceTable,
		date: Day,
	) -> Self {
		let rows = roster
			.iter()
			.enumerate()
			.map(|(idx, worker)| ReportRow {
				number: idx + 1,
				name: worker.name.clone(),
				trade: worker.trade.clone(),
				mark: table.mark(&date, &worker.id),
			})
			.collect::<Vec<_>>();
		let summary = Summary::tally(rows.iter().map(|row| row.mark));
		Self {
			site: site.into(),
			supervisor: supervisor.map(|supervisor| supervisor.name.clone()).unwrap_or_default(),
			date,
			rows,
			summary,
		}
	}

	pub fn file_name(&self) -> String {
		format!("attendance_{}.pdf", self.date)
	}

	/// `Present: 5   Absent: 2   Not Marked: 1   Total: 8`
	pub fn totals_line(&self) -> String {
		let counts = self.summary.iter().map(|(mark, count)| format!("{}: {count}", mark.label()));
		let total = std::iter::once(format!("Total: {}", self.summary.total()));
		counts.chain(total).join("   ")
	}
}

use crate::{absence::WINDOW_DAYS, data::Day, session::use_session};
use yew::prelude::*;

/// Running totals for the selected date.
#[function_component]
pub fn SummaryCards() -> Html {
	let session = use_session();
	let summary = session.summary(&session.selected_date());
	html! {
		<div class="row g-2 mb-3">
			{summary.iter().map(|(mark, count)| html! {
				<div class="col">
					<div class={classes!("card", "text-center", format!("border-{}", mark.tone()))}>
						<div class="card-body py-2">
							<div class="fs-4 fw-semibold">{count}</div>
							<div class="small text-body-secondary">{mark.label()}</div>
						</div>
					</div>
				</div>
			}).collect::<Vec<_>>()}
			<div class="col">
				<div class="card text-center">
					<div class="card-body py-2">
						<div class="fs-4 fw-semibold">{summary.total()}</div>
						<div class="small text-body-secondary">{"Total"}</div>
					</div>
				</div>
			</div>
		</div>
	}
}

/// Workers missing on each of the days before today.
/// Always anchored on the real current date, not the date being edited.
#[function_component]
pub fn AbsenceAlert() -> Html {
	let session = use_session();
	let today = Day::today();
	let flagged = session.flagged(today);
	if flagged.is_empty() {
		return html!();
	}
	html! {
		<div class="alert alert-warning" role="alert">
			<h6 class="alert-heading">
				<i class="bi bi-exclamation-triangle me-2" />
				{format!("Absent for the last {WINDOW_DAYS} days ({})", flagged.len())}
			</h6>
			<ul class="mb-0">
				{flagged.into_iter().map(|worker| html! {
					<li key={worker.id.clone()}>{&worker.name}{" "}<span class="text-body-secondary">{format!("({})", worker.trade)}</span></li>
				}).collect::<Vec<_>>()}
			</ul>
		</div>
	}
}

use crate::{
	components::{notify, AbsenceAlert, AuthSwitch, ExportButton, Login, ReportSheet, RosterTable, SummaryCards},
	data::{AttendanceStatus, Day, Mark},
	session::use_session,
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[function_component]
pub fn Dashboard() -> Html {
	html! {
		<AuthSwitch
			identified={html!(<Attendance />)}
			anonymous={html!(<Login />)}
		/>
	}
}

#[function_component]
fn Attendance() -> Html {
	let session = use_session();
	let report_node = use_node_ref();
	let day = session.selected_date();

	let select_date = Callback::from({
		let session = session.clone();
		move |evt: web_sys::Event| {
			let Some(value) = evt.input_value() else {
				return;
			};
			match value.parse::<Day>() {
				Ok(day) => session.set_selected_date(day),
				Err(err) => log::debug!(target: "session", "ignoring date input {value:?}: {err}"),
			}
		}
	});
	let select_today = Callback::from({
		let session = session.clone();
		move |_: MouseEvent| session.set_selected_date(Day::today())
	});
	let mark_all = |status: AttendanceStatus| {
		let session = session.clone();
		Callback::from(move |_: MouseEvent| {
			session.mark_all(status, day);
			let label = Mark::from(status).label().to_lowercase();
			notify::info(format!("All workers marked {label} for {day}."));
		})
	};

	html! {
		<div class="container">
			<div class="d-flex flex-wrap align-items-end gap-2 mb-3">
				<div>
					<label for="selected-date" class="form-label mb-1">{"Date"}</label>
					<div class="input-group">
						<input
							type="date" class="form-control"
							id="selected-date" value={day.to_string()}
							onchange={select_date}
						/>
						<button class="btn btn-outline-secondary" onclick={select_today}>{"Today"}</button>
					</div>
				</div>
				<div class="btn-group ms-md-3">
					<button class="btn btn-success" onclick={mark_all(AttendanceStatus::Present)}>
						<i class="bi bi-check2-all me-1" />
						{"Mark All Present"}
					</button>
					<button class="btn btn-danger" onclick={mark_all(AttendanceStatus::Absent)}>
						<i class="bi bi-x-lg me-1" />
						{"Mark All Absent"}
					</button>
				</div>
				<div class="ms-auto">
					<ExportButton report={report_node.clone()} />
				</div>
			</div>

			<SummaryCards />
			<AbsenceAlert />
			<RosterTable />

			<h5 class="mt-4">{"Report Preview"}</h5>
			<ReportSheet report={session.report(day)} node={report_node} />
		</div>
	}
}

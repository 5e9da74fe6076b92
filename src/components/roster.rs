use crate::{
	data::{AttendanceStatus, Mark, Worker},
	session::use_session,
};
use yew::prelude::*;

/// One row per worker with Present/Absent controls for the selected date.
#[function_component]
pub fn RosterTable() -> Html {
	let session = use_session();
	let day = session.selected_date();
	html! {
		<div class="table-responsive">
			<table class="table table-hover align-middle">
				<thead>
					<tr>
						<th scope="col">{"#"}</th>
						<th scope="col">{"Name"}</th>
						<th scope="col">{"Trade"}</th>
						<th scope="col">{"Status"}</th>
						<th scope="col" class="text-end">{"Mark"}</th>
					</tr>
				</thead>
				<tbody>
					{session.roster().iter().enumerate().map(|(idx, worker)| html! {
						<WorkerRow
							key={worker.id.clone()}
							number={idx + 1}
							worker={worker.clone()}
							mark={session.mark(&worker.id, &day)}
						/>
					}).collect::<Vec<_>>()}
				</tbody>
			</table>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct WorkerRowProps {
	number: usize,
	worker: Worker,
	mark: Mark,
}

#[function_component]
fn WorkerRow(WorkerRowProps { number, worker, mark }: &WorkerRowProps) -> Html {
	let session = use_session();
	let set_status = |status: AttendanceStatus| {
		let session = session.clone();
		let worker_id = worker.id.clone();
		Callback::from(move |_: MouseEvent| {
			session.mark_one(worker_id.clone(), status, session.selected_date());
		})
	};
	let button = |status: AttendanceStatus, label: &'static str, tone: &'static str| {
		let active = Mark::from(status) == *mark;
		let classes = match active {
			true => classes!("btn", format!("btn-{tone}")),
			false => classes!("btn", format!("btn-outline-{tone}")),
		};
		html! {
			<button type="button" class={classes} aria-pressed={active.to_string()} onclick={set_status(status)}>
				{label}
			</button>
		}
	};
	html! {
		<tr>
			<td>{*number}</td>
			<td>{&worker.name}</td>
			<td class="text-body-secondary">{&worker.trade}</td>
			<td><span class={classes!("badge", format!("text-bg-{}", mark.tone()))}>{mark.label()}</span></td>
			<td class="text-end">
				<div class="btn-group btn-group-sm" role="group">
					{button(AttendanceStatus::Present, "Present", Mark::Present.tone())}
					{button(AttendanceStatus::Absent, "Absent", Mark::Absent.tone())}
				</div>
			</td>
		</tr>
	}
}

use crate::{
	components::{notify, AuthSwitch, ExportButton, Login, ReportSheet},
	session::use_session,
};
use yew::prelude::*;

/// The report on its own, laid out for the browser's print dialog.
#[function_component]
pub fn PrintableReport() -> Html {
	html! {
		<AuthSwitch
			identified={html!(<ReportPage />)}
			anonymous={html!(<Login />)}
		/>
	}
}

#[function_component]
fn ReportPage() -> Html {
	let session = use_session();
	let report_node = use_node_ref();
	let print = Callback::from(|_: MouseEvent| {
		if let Err(err) = gloo_utils::window().print() {
			log::error!(target: "export", "{err:?}");
			notify::error("The browser could not open the print dialog.");
		}
	});
	html! {
		<div class="container" style="max-width: 800px;">
			<div class="d-flex gap-2 mb-3 d-print-none">
				<button class="btn btn-outline-dark" onclick={print}>
					<i class="bi bi-printer me-2" />
					{"Print"}
				</button>
				<ExportButton report={report_node.clone()} />
			</div>
			<ReportSheet report={session.report(session.selected_date())} node={report_node} />
		</div>
	}
}

use crate::{components::notify, export, hooks::use_task, session::use_session};
use futures_util::FutureExt;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ExportButtonProps {
	/// The rendered report sheet to export.
	pub report: NodeRef,
}

/// Exports the selected date's report as a PDF download.
#[function_component]
pub fn ExportButton(ExportButtonProps { report }: &ExportButtonProps) -> Html {
	let session = use_session();
	let task = use_task("export", {
		let session = session.clone();
		let node = report.clone();
		move || {
			let report = session.report(session.selected_date());
			let mounted = node.get().is_some();
			async move {
				match export::export(report, mounted).await {
					Ok(file_name) => {
						notify::success(format!("Saved {file_name}."));
						Ok(())
					}
					Err(err) => {
						notify::error(err.to_string());
						Err(err.into())
					}
				}
			}
			.boxed_local()
		}
	});
	let pending = task.is_pending();
	html! {
		<button class="btn btn-dark" onclick={task.callback()} disabled={pending}>
			{match pending {
				true => html!(<span class="spinner-border spinner-border-sm me-2" role="status" />),
				false => html!(<i class="bi bi-file-earmark-pdf me-2" />),
			}}
			{"Export PDF"}
		</button>
	}
}

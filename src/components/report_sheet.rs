use crate::report::Report;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReportSheetProps {
	pub report: Report,
	/// Attached to the outer element so callers can tell whether the sheet is mounted.
	#[prop_or_default]
	pub node: NodeRef,
}

/// The fixed-layout daily report, as printed and exported.
#[function_component]
pub fn ReportSheet(ReportSheetProps { report, node }: &ReportSheetProps) -> Html {
	html! {
		<div class="report-sheet bg-white text-dark p-4 border" ref={node.clone()}>
			<h4 class="mb-3">{Report::TITLE}</h4>
			<dl class="row mb-3">
				<dt class="col-3">{"Site"}</dt>
				<dd class="col-9">{&report.site}</dd>
				<dt class="col-3">{"Supervisor"}</dt>
				<dd class="col-9">{&report.supervisor}</dd>
				<dt class="col-3">{"Date"}</dt>
				<dd class="col-9">{report.date.to_string()}</dd>
			</dl>
			<table class="table table-sm table-bordered">
				<thead>
					<tr>
						{Report::COLUMNS.iter().map(|heading| html!(<th scope="col">{*heading}</th>)).collect::<Vec<_>>()}
					</tr>
				</thead>
				<tbody>
					{report.rows.iter().map(|row| html! {
						<tr key={row.number}>
							<td>{row.number}</td>
							<td>{&row.name}</td>
							<td>{&row.trade}</td>
							<td>{row.mark.label()}</td>
						</tr>
					}).collect::<Vec<_>>()}
				</tbody>
			</table>
			<p class="fw-semibold mb-0">{report.totals_line()}</p>
		</div>
	}
}

use crate::{
	components::{notify, AuthSwitch},
	page::Route,
	session::use_session,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component]
pub fn Header() -> Html {
	let session = use_session();
	let logout = Callback::from({
		let session = session.clone();
		move |_| {
			session.logout();
			notify::info("Logged out. Attendance records were kept.");
		}
	});
	let supervisor = session.supervisor().map(|supervisor| supervisor.name.clone()).unwrap_or_default();

	html! {
		<nav class="navbar navbar-expand navbar-dark bg-dark mb-3 d-print-none">
			<div class="container-fluid">
				<Link<Route> classes="navbar-brand" to={Route::Dashboard}>
					<i class="bi bi-cone-striped me-2" />
					{crate::config::SITE_NAME}
				</Link<Route>>
				<AuthSwitch
					identified={html! {<>
						<ul class="navbar-nav me-auto">
							<li class="nav-item">
								<Link<Route> classes="nav-link" to={Route::Dashboard}>{"Attendance"}</Link<Route>>
							</li>
							<li class="nav-item">
								<Link<Route> classes="nav-link" to={Route::Report}>{"Printable Report"}</Link<Route>>
							</li>
						</ul>
						<span class="navbar-text me-3">
							<i class="bi bi-person-badge me-1" />
							{supervisor}
						</span>
						<button class="btn btn-outline-light btn-sm" onclick={logout}>{"Logout"}</button>
					</>}}
				/>
			</div>
		</nav>
	}
}

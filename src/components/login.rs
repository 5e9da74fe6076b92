use crate::{components::notify, session::use_session, util::web_ext::InputExt};
use yew::prelude::*;

/// Picks one of the configured supervisors. There are no passwords.
#[function_component]
pub fn Login() -> Html {
	let session = use_session();
	let supervisors = use_memo((), |_| crate::config::supervisors());
	let chosen = use_state_eq(|| supervisors.first().map(|supervisor| supervisor.id.clone()));

	let choose = Callback::from({
		let chosen = chosen.clone();
		move |evt: web_sys::Event| {
			if let Some(id) = evt.select_value() {
				chosen.set(Some(id));
			}
		}
	});
	let login = Callback::from({
		let session = session.clone();
		let supervisors = supervisors.clone();
		let chosen = chosen.clone();
		move |_| {
			let Some(id) = &*chosen else {
				return;
			};
			let Some(supervisor) = supervisors.iter().find(|supervisor| &supervisor.id == id) else {
				log::error!(target: "session", "unknown supervisor {id:?}");
				return;
			};
			notify::success(format!("Welcome, {}.", supervisor.name));
			session.login(supervisor.clone());
		}
	});

	html! {
		<div class="container" style="max-width: 420px;">
			<div class="card mt-5">
				<div class="card-body">
					<h4 class="card-title mb-1">{"Site Attendance"}</h4>
					<p class="text-body-secondary">{crate::config::SITE_NAME}</p>
					<label for="supervisor" class="form-label">{"Supervisor"}</label>
					<select class="form-select mb-3" id="supervisor" onchange={choose}>
						{supervisors.iter().map(|supervisor| html! {
							<option
								value={supervisor.id.clone()}
								selected={chosen.as_deref() == Some(supervisor.id.as_str())}
							>
								{&supervisor.name}
							</option>
						}).collect::<Vec<_>>()}
					</select>
					<button class="btn btn-primary w-100" onclick={login} disabled={chosen.is_none()}>
						{"Log In"}
					</button>
				</div>
			</div>
		</div>
	}
}

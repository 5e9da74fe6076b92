use yew::prelude::*;
use yew_router::BrowserRouter;

pub mod absence;
pub mod components;
pub mod config;
pub mod data;
pub mod export;
pub mod hooks;
pub mod logging;
pub mod page;
pub mod report;
pub mod session;
pub mod storage;
pub mod util;

/// Installs the console logger and mounts the app onto the document body.
pub fn start() {
	logging::init(logging::Config::default().prefer_target());
	log::info!(target: "session", "starting {} attendance register", config::SITE_NAME);
	yew::Renderer::<App>::new().render();
}

#[function_component]
fn App() -> Html {
	html! {
		<BrowserRouter>
			<session::Provider>
				<components::Header />
				<components::Toaster />
				<page::Pages />
			</session::Provider>
		</BrowserRouter>
	}
}

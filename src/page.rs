use yew::prelude::*;
use yew_router::{prelude::Switch, Routable};

mod dashboard;
pub use dashboard::*;
mod report;
pub use report::*;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Dashboard,
	#[at("/report")]
	Report,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	fn html(self) -> Html {
		match self {
			Self::Dashboard => html!(<Dashboard />),
			Self::Report => html!(<PrintableReport />),
			Self::NotFound => html! {
				<div class="container">
					<h1>{"404: Page not found"}</h1>
				</div>
			},
		}
	}
}

#[function_component]
pub fn Pages() -> Html {
	html!(<Switch<Route> render={Route::html} />)
}

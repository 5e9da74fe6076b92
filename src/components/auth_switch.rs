use crate::session::use_session;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Shows `identified` while a supervisor is logged in, `anonymous` otherwise.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let session = use_session();
	let branch = match session.supervisor() {
		Some(_) => &props.identified,
		None => &props.anonymous,
	};
	branch.clone().unwrap_or_default()
}

use yew::TargetCast;

pub trait InputExt {
	fn input_value(&self) -> Option<String>;
	fn select_value(&self) -> Option<String>;
}

impl InputExt for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		let Some(element) = self.target_dyn_into::<web_sys::HtmlInputElement>() else {
			return None;
		};
		Some(element.value())
	}

	fn select_value(&self) -> Option<String> {
		let Some(element) = self.target_dyn_into::<web_sys::HtmlSelectElement>() else {
			return None;
		};
		Some(element.value())
	}
}

//! Transient toasts for success, info and error feedback.
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
	Success,
	Info,
	Error,
}

impl Level {
	fn classes(self) -> &'static str {
		match self {
			Self::Success => "text-bg-success",
			Self::Info => "text-bg-info",
			Self::Error => "text-bg-danger",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub id: usize,
	pub level: Level,
	pub message: AttrValue,
}

#[derive(Default, Clone, Debug, PartialEq, Store)]
pub struct Toasts {
	next_id: usize,
	items: Vec<Toast>,
}

impl Toasts {
	fn push(&mut self, level: Level, message: AttrValue) {
		let id = self.next_id;
		self.next_id += 1;
		self.items.push(Toast { id, level, message });
	}

	fn dismiss(&mut self, id: usize) {
		self.items.retain(|toast| toast.id != id);
	}
}

pub fn push(level: Level, message: impl Into<AttrValue>) {
	let message = message.into();
	Dispatch::<Toasts>::global().reduce_mut(move |toasts| toasts.push(level, message));
}

pub fn success(message: impl Into<AttrValue>) {
	push(Level::Success, message);
}

pub fn info(message: impl Into<AttrValue>) {
	push(Level::Info, message);
}

pub fn error(message: impl Into<AttrValue>) {
	push(Level::Error, message);
}

#[function_component]
pub fn Toaster() -> Html {
	let toasts = use_store_value::<Toasts>();
	html! {
		<div class="toast-container position-fixed top-0 end-0 p-3">
			{toasts.items.iter().map(|toast| html!(<ToastItem key={toast.id} toast={toast.clone()} />)).collect::<Vec<_>>()}
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ToastItemProps {
	toast: Toast,
}

#[function_component]
fn ToastItem(ToastItemProps { toast }: &ToastItemProps) -> Html {
	let dispatch = Dispatch::<Toasts>::global();
	let id = toast.id;
	yew_hooks::use_timeout(
		{
			let dispatch = dispatch.clone();
			move || dispatch.reduce_mut(|toasts| toasts.dismiss(id))
		},
		crate::config::TOAST_MILLIS,
	);
	let close = dispatch.reduce_mut_callback(move |toasts| toasts.dismiss(id));
	html! {
		<div class={classes!("toast", "show", "align-items-center", "border-0", toast.level.classes())} role="alert">
			<div class="d-flex">
				<div class="toast-body">{toast.message.clone()}</div>
				<button type="button" class="btn-close btn-close-white me-2 m-auto" onclick={close} />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toasts_get_unique_ids_and_dismiss_individually() {
		let mut toasts = Toasts::default();
		toasts.push(Level::Info, "one".into());
		toasts.push(Level::Error, "two".into());
		toasts.dismiss(0);
		assert_eq!(toasts.items.len(), 1);
		assert_eq!(toasts.items[0].id, 1);
		assert_eq!(toasts.items[0].level, Level::Error);
		toasts.push(Level::Success, "three".into());
		assert_eq!(toasts.items[1].id, 2);
	}
}

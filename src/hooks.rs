use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use yew::prelude::*;

/// A one-shot background job started from an event handler.
pub struct TaskHandle {
	pending: UseStateHandle<bool>,
	run: Rc<dyn Fn()>,
}
impl TaskHandle {
	pub fn is_pending(&self) -> bool {
		*self.pending
	}

	pub fn callback<T>(&self) -> Callback<T> {
		let run = self.run.clone();
		Callback::from(move |_| (*run)())
	}
}

/// Runs the future built by `make_future` on the local executor each time the
/// handle is triggered, tracking whether one is still in flight.
/// Errors are logged under `target`.
#[hook]
pub fn use_task<F>(target: &'static str, make_future: F) -> TaskHandle
where
	F: Fn() -> LocalBoxFuture<'static, anyhow::Result<()>> + 'static,
{
	let pending = use_state_eq(|| false);
	let make_future = Rc::new(make_future);
	let run = {
		let pending = pending.clone();
		Rc::new(move || {
			pending.set(true);
			let pending = pending.clone();
			let future = make_future();
			crate::util::spawn_local(target, async move {
				let result = future.await;
				pending.set(false);
				result
			});
		})
	};
	TaskHandle { pending, run }
}

pub mod web_ext;

pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Today's date in the browser's local timezone.
#[cfg(target_family = "wasm")]
pub fn local_today() -> time::Date {
	let now = js_sys::Date::new_0();
	let month = time::Month::try_from(now.get_month() as u8 + 1);
	let date = month.and_then(|month| time::Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8));
	match date {
		Ok(date) => date,
		Err(err) => {
			log::warn!(target: "util", "browser clock gave an invalid date ({err}), falling back to UTC");
			time::OffsetDateTime::now_utc().date()
		}
	}
}

/// Today's date in the host's local timezone, or UTC if the offset is unknown.
#[cfg(not(target_family = "wasm"))]
pub fn local_today() -> time::Date {
	time::OffsetDateTime::now_local()
		.unwrap_or_else(|_| time::OffsetDateTime::now_utc())
		.date()
}

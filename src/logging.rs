//! Routes the `log` facade to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}

impl Config {
	#[cfg(test)]
	fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// Prefix each message with its log target (`[storage] ...`).
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	fn format(&self, record: &Record) -> String {
		match self.prefer_target {
			true => format!("[{}] {}", record.target(), record.args()),
			false => format!("{}", record.args()),
		}
	}
}

struct Console(Config);

impl Log for Console {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.0.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let message = JsValue::from_str(&self.0.format(record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&message),
			Level::Warn => web_sys::console::warn_1(&message),
			Level::Info => web_sys::console::info_1(&message),
			Level::Debug => web_sys::console::debug_1(&message),
			Level::Trace => web_sys::console::log_1(&message),
		}
	}

	fn flush(&self) {}
}

/// Installs the console logger. Later calls are ignored.
pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(Console(config))).is_ok() {
		log::set_max_level(level);
	}
}

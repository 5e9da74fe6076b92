//! Durable records kept in the browser's local storage.
//!
//! Three records live here, each under its own key: the worker roster, the
//! attendance table and the logged-in supervisor. Reads recover from missing
//! or corrupted values by falling back to a default; writes are best effort.
use crate::data::{AttendanceTable, Roster, Supervisor};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
	#[error("failed to read {key:?}: {reason}")]
	Read { key: String, reason: String },
	#[error("failed to write {key:?}: {reason}")]
	Write { key: String, reason: String },
	#[error("record {key:?} is not valid: {reason}")]
	Corrupt { key: String, reason: String },
}

/// JSON key-value storage scoped to one browser profile.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
	fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;
	fn delete(&self, key: &str);
}

/// `window.localStorage`.
pub struct Browser;

impl Browser {
	/// Whether local storage can be used at all (it is disabled in some
	/// sandboxed frames and privacy modes).
	pub fn is_available() -> bool {
		let Some(window) = web_sys::window() else {
			return false;
		};
		matches!(window.local_storage(), Ok(Some(_)))
	}
}

impl KeyValueStore for Browser {
	fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
		use gloo_storage::errors::StorageError as GlooError;
		match LocalStorage::get::<Value>(key) {
			Ok(value) => Ok(Some(value)),
			Err(GlooError::KeyNotFound(_)) => Ok(None),
			Err(GlooError::SerdeError(err)) => Err(StorageError::Corrupt {
				key: key.to_owned(),
				reason: err.to_string(),
			}),
			Err(err) => Err(StorageError::Read {
				key: key.to_owned(),
				reason: err.to_string(),
			}),
		}
	}

	fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
		LocalStorage::set(key, value).map_err(|err| StorageError::Write {
			key: key.to_owned(),
			reason: err.to_string(),
		})
	}

	fn delete(&self, key: &str) {
		LocalStorage::delete(key);
	}
}

/// Storage that only lives as long as the page. Used when local storage is
/// unavailable, and by tests. Values are kept as JSON text, like local storage
/// keeps them.
#[derive(Default)]
pub struct MemoryStore {
	entries: RefCell<BTreeMap<String, String>>,
	reject_writes: bool,
}

impl MemoryStore {
	/// A store whose writes always fail.
	pub fn read_only() -> Self {
		Self {
			reject_writes: true,
			..Default::default()
		}
	}

	pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.borrow_mut().insert(key.into(), value.into());
		self
	}

	pub fn raw(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
		let Some(text) = self.raw(key) else {
			return Ok(None);
		};
		serde_json::from_str(&text).map(Some).map_err(|err| StorageError::Corrupt {
			key: key.to_owned(),
			reason: err.to_string(),
		})
	}

	fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
		if self.reject_writes {
			return Err(StorageError::Write {
				key: key.to_owned(),
				reason: "store is read-only".into(),
			});
		}
		self.entries.borrow_mut().insert(key.to_owned(), value.to_string());
		Ok(())
	}

	fn delete(&self, key: &str) {
		self.entries.borrow_mut().remove(key);
	}
}

/// Opens local storage, or an in-memory stand-in if the browser refuses it.
pub fn open() -> Rc<dyn KeyValueStore> {
	match Browser::is_available() {
		true => Rc::new(Browser),
		false => {
			log::warn!(target: "storage", "local storage is unavailable, changes will be lost on reload");
			Rc::new(MemoryStore::default())
		}
	}
}

/// A value persisted as JSON under a fixed key.
pub trait Record: Serialize + DeserializeOwned {
	fn id() -> &'static str;

	fn key() -> String {
		format!("{}/{}", crate::config::STORAGE_PREFIX, Self::id())
	}

	fn load(store: &dyn KeyValueStore) -> Result<Option<Self>, StorageError> {
		let key = Self::key();
		let Some(value) = store.get(&key)? else {
			return Ok(None);
		};
		serde_json::from_value(value).map(Some).map_err(|err| StorageError::Corrupt {
			key,
			reason: err.to_string(),
		})
	}

	/// Loads the record, substituting `fallback` if it is missing or unreadable.
	fn load_or_else(store: &dyn KeyValueStore, fallback: impl FnOnce() -> Self) -> Self {
		match Self::load(store) {
			Ok(Some(value)) => value,
			Ok(None) => fallback(),
			Err(err) => {
				log::warn!(target: "storage", "{err}; using the default instead");
				fallback()
			}
		}
	}

	fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
		let key = Self::key();
		let value = serde_json::to_value(self).map_err(|err| StorageError::Write {
			key: key.clone(),
			reason: err.to_string(),
		})?;
		store.set(&key, &value)
	}

	fn delete(store: &dyn KeyValueStore) {
		store.delete(&Self::key());
	}
}

impl Record for Roster {
	fn id() -> &'static str {
		"workers"
	}
}

impl Record for AttendanceTable {
	fn id() -> &'static str {
		"attendance"
	}
}

impl Record for Supervisor {
	fn id() -> &'static str {
		"supervisor"
	}
}

use crate::model::AnswerRecord;

/// Storage key for the answer record. The `v4` suffix is part of the key:
/// older revisions used incompatible layouts and their data is simply
/// orphaned, not migrated.
pub const ANSWERS_KEY: &str = "quiz-p-v4";

/// Minimal key-value capability the app persists through. Production
/// backends are browser localStorage (wasm) and a per-key JSON file
/// (native); tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Reads the persisted answer record. Absent, unreadable or unparseable
/// content all degrade to an empty record; nothing is surfaced.
pub fn load_answers(store: &dyn KeyValueStore) -> AnswerRecord {
    let Some(raw) = store.get(ANSWERS_KEY) else {
        return AnswerRecord::default();
    };
    match serde_json::from_str(&raw) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("stored answers unreadable, starting empty: {err}");
            AnswerRecord::default()
        }
    }
}

/// Serializes the whole record under [`ANSWERS_KEY`], overwriting whatever
/// was there. Write failures are swallowed; in-memory state stays
/// authoritative for the session.
pub fn save_answers(store: &mut dyn KeyValueStore, answers: &AnswerRecord) {
    match serde_json::to_string(answers) {
        Ok(json) => store.set(ANSWERS_KEY, &json),
        Err(err) => log::warn!("could not serialize answers: {err}"),
    }
}

/// Plain in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Browser localStorage.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
}

/// One JSON file per key next to the executable's working directory,
/// e.g. `quiz-p-v4.json`.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = std::fs::write(self.path(key), value) {
            log::warn!("could not write {}: {err}", self.path(key).display());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(BrowserStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(FileStore::new("."))
}

/// Store handle that can be kept by a test after the app takes ownership
/// of a clone.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct SharedStore(pub std::rc::Rc<std::cell::RefCell<MemoryStore>>);

#[cfg(test)]
impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.borrow_mut().set(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_empty_store_is_empty() {
        let store = MemoryStore::new();
        assert!(load_answers(&store).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let mut answers = AnswerRecord::default();
        answers.record(1, 1);
        answers.record(7, 0);

        save_answers(&mut store, &answers);
        assert_eq!(load_answers(&store), answers);
    }

    #[test]
    fn empty_record_round_trips() {
        let mut store = MemoryStore::new();
        save_answers(&mut store, &AnswerRecord::default());
        assert_eq!(store.get(ANSWERS_KEY).as_deref(), Some("{}"));
        assert!(load_answers(&store).is_empty());
    }

    #[test]
    fn malformed_content_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.set(ANSWERS_KEY, "definitely {not json");
        assert!(load_answers(&store).is_empty());

        store.set(ANSWERS_KEY, r#"["wrong","shape"]"#);
        assert!(load_answers(&store).is_empty());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let mut store = MemoryStore::new();
        let mut answers = AnswerRecord::default();
        answers.record(1, 3);
        save_answers(&mut store, &answers);

        answers.clear();
        save_answers(&mut store, &answers);
        assert!(load_answers(&store).is_empty());
    }
}

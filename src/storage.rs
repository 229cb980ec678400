use std::collections::HashMap;

pub const BRUSH_COLOR_KEY: &str = "brushColor";
pub const BRUSH_SIZE_KEY: &str = "brushSize";
pub const SYMMETRY_KEY: &str = "symmetryMode";
pub const GALLERY_KEY: &str = "gallery";

/// String key-value store provided by the host.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-process store for tests, headless runs and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

// eframe persists to a RON file natively and to localStorage on the web.
impl<'a> KeyValueStore for dyn eframe::Storage + 'a {
    fn get(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.set_string(key, value);
    }
}

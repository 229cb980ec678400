use crate::storage::{GALLERY_KEY, KeyValueStore};

/// Exported artworks as PNG data URLs, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let Some(raw) = store.get(GALLERY_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => {
                log::info!("Loaded gallery with {} artworks", items.len());
                Self { items }
            }
            Err(err) => {
                log::warn!("Stored gallery is unreadable, starting empty: {}", err);
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        // Serializing a Vec<String> cannot fail.
        let encoded = serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_owned());
        store.set(GALLERY_KEY, encoded);
    }

    pub fn push(&mut self, data_url: String) {
        self.items.push(data_url);
    }

    /// Deletes the item at `index` and re-persists. Out-of-range is a no-op.
    pub fn remove<S: KeyValueStore + ?Sized>(&mut self, index: usize, store: &mut S) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.save(store);
        log::info!("Deleted artwork {}, {} left", index + 1, self.items.len());
        Some(removed)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

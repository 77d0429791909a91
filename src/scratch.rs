use std::ops::Deref;
use std::path::PathBuf;

use crate::store::hotel::Store;

/// A store in its own temp directory, removed again on drop.
pub struct ScratchStore {
    dir: PathBuf,
    store: Store,
}

impl ScratchStore {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("hotel-ledger-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("unable to create scratch dir");
        let store = Store::new(dir.join("hotel_data.json"));
        Self { dir, store }
    }

    /// A separate handle on the same file.
    pub fn handle(&self) -> Store {
        self.store.clone()
    }
}

impl Deref for ScratchStore {
    type Target = Store;

    fn deref(&self) -> &Store {
        &self.store
    }
}

impl Drop for ScratchStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

mod store;

pub use store::{DELIMITER, StoreError, StoreKey, StoreSnapshot, TranslationEntry, TranslationStore};

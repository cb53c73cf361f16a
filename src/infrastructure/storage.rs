use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;
use web_sys::Storage;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::describe_js_error;
use crate::log_warn;

/// String key/value persistence.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`.
#[derive(Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> AppResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| AppError::Storage(describe_js_error(&e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| AppError::Storage(describe_js_error(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage.set_item(key, value).map_err(|e| AppError::Storage(describe_js_error(&e)))
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.storage.remove_item(key).map_err(|e| AppError::Storage(describe_js_error(&e)))
    }
}

/// In-process store. Used for native tests and as the fallback when the
/// browser refuses to hand out `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// One named slot holding the JSON form of a `T`.
pub struct PersistentSlot<T> {
    key: String,
    store: Rc<dyn KeyValueStore>,
    _value: PhantomData<T>,
}

impl<T> Clone for PersistentSlot<T> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone(), store: Rc::clone(&self.store), _value: PhantomData }
    }
}

impl<T: Serialize + DeserializeOwned> PersistentSlot<T> {
    pub fn new(key: impl Into<String>, store: Rc<dyn KeyValueStore>) -> Self {
        Self { key: key.into(), store, _value: PhantomData }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Ok(None)` when the slot was never written.
    pub fn load(&self) -> AppResult<Option<T>> {
        match self.store.get_item(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Read the slot, falling back to `default` on absence or corruption.
    pub fn load_or(&self, default: T) -> T {
        match self.load() {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                log_warn!(
                    LogComponent::Infrastructure("Storage"),
                    "ignoring unreadable '{}' slot: {}",
                    self.key,
                    err
                );
                default
            }
        }
    }

    pub fn save(&self, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(&self.key, &raw)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove_item(&self.key)
    }
}

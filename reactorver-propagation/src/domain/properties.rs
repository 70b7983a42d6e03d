//! Host property bag
//!
//! The host keeps one key/value store per build (Maven's user properties).
//! It is the only channel through which one descriptor read can see what
//! earlier reads did: a value is always replaced whole, last writer wins.

use std::collections::{BTreeMap, HashMap};

pub trait PropertyBag {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);
}

impl PropertyBag for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

impl PropertyBag for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

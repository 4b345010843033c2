//! Metadata a bridge registry uses to discover the module

use asyncstore_core::constants::MODULE_NAME;
use serde::Serialize;
use serde_json::{Map, Value};

/// Method names callable through the bridge, in registration order
pub const EXPORTED_METHODS: [&str; 5] = [
    "multiGet",
    "multiSet",
    "multiRemove",
    "clear",
    "getAllKeys",
];

/// Name, exported methods and exported constants of a native module
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleDescriptor {
    pub name: &'static str,
    pub methods: Vec<&'static str>,
    pub constants: Map<String, Value>,
}

impl ModuleDescriptor {
    /// Descriptor of the async local storage module
    pub fn async_local_storage() -> Self {
        Self {
            name: MODULE_NAME,
            methods: EXPORTED_METHODS.to_vec(),
            constants: Map::new(),
        }
    }

    pub fn exports(&self, method: &str) -> bool {
        self.methods.contains(&method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_for_registry() {
        let descriptor = ModuleDescriptor::async_local_storage();
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "name": "RCTAsyncLocalStorage",
                "methods": ["multiGet", "multiSet", "multiRemove", "clear", "getAllKeys"],
                "constants": {}
            })
        );
    }

    #[test]
    fn test_exports() {
        let descriptor = ModuleDescriptor::async_local_storage();
        assert!(descriptor.exports("getAllKeys"));
        assert!(!descriptor.exports("multiMerge"));
    }
}

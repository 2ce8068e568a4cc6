use catalog_views::catalog::domain::{DisplayNames, DisplayRequest};
use catalog_views::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DisplayNameLookup with explicit names that records every request
#[derive(Default, Clone)]
pub struct MockDisplayNameLookup {
    names: HashMap<(String, String), String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockDisplayNameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name_type: &str, code: &str, name: &str) -> Self {
        self.names
            .insert((name_type.to_string(), code.to_string()), name.to_string());
        self
    }

    /// Entity kinds of all requests, in call order
    pub fn requested_kinds(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl DisplayNameLookup for MockDisplayNameLookup {
    fn resolve(&self, request: &DisplayRequest<'_>) -> DisplayNames {
        self.requested
            .lock()
            .unwrap()
            .push(request.entity_kind.to_string());

        request
            .codes
            .iter()
            .filter_map(|code| {
                self.names
                    .get(&(code.name_type.to_string(), code.code.to_string()))
                    .map(|name| (code.display_field(), name.clone()))
            })
            .collect()
    }
}

//! Saved report widgets and the persistence seam.
//!
//! The dashboard saves a widget as its natural-language query text, not the
//! compiled definition, so replaying a widget normally re-invokes the
//! external translation call. `SavedWidget` additionally caches the last
//! successful translation: replay only goes back to the translator when the
//! query text has changed. The engine itself never touches a store;
//! `WidgetStore` is the boundary to the application's key-value
//! persistence, with `MemoryWidgetStore` as the in-memory reference
//! implementation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ReportDefinition;

/// A saved report widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWidget {
    pub id: Uuid,
    pub title: String,
    /// The original natural-language query text.
    pub query: String,
    /// Last successful translation of `query`; stale once `query` changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<ReportDefinition>,
}

impl SavedWidget {
    pub fn new(title: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            query: query.into(),
            definition: None,
        }
    }

    /// Cache the compiled definition for replay.
    pub fn with_definition(mut self, definition: ReportDefinition) -> Self {
        self.definition = Some(definition);
        self
    }
}

/// Key-value persistence boundary for saved widgets.
pub trait WidgetStore {
    /// Insert or replace by id.
    fn put(&mut self, widget: SavedWidget);
    fn get(&self, id: Uuid) -> Option<SavedWidget>;
    fn remove(&mut self, id: Uuid) -> Option<SavedWidget>;
    /// All widgets in insertion order.
    fn list(&self) -> Vec<SavedWidget>;
}

/// In-memory widget store.
#[derive(Debug, Default)]
pub struct MemoryWidgetStore {
    widgets: Vec<SavedWidget>,
}

impl MemoryWidgetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WidgetStore for MemoryWidgetStore {
    fn put(&mut self, widget: SavedWidget) {
        match self.widgets.iter_mut().find(|w| w.id == widget.id) {
            Some(slot) => *slot = widget,
            None => self.widgets.push(widget),
        }
    }

    fn get(&self, id: Uuid) -> Option<SavedWidget> {
        self.widgets.iter().find(|w| w.id == id).cloned()
    }

    fn remove(&mut self, id: Uuid) -> Option<SavedWidget> {
        let at = self.widgets.iter().position(|w| w.id == id)?;
        Some(self.widgets.remove(at))
    }

    fn list(&self) -> Vec<SavedWidget> {
        self.widgets.clone()
    }
}

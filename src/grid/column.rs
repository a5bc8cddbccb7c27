//! Column descriptors
//!
//! A column is a stable field key plus a capability set. Behavior is
//! decided by asking which capabilities are present, never by column kind.

use std::fmt;
use std::sync::Arc;

/// Custom cell value accessor used when copying cells out as text
pub type ValueGetter<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

pub struct Column<R> {
    /// Field identifier within a row record
    pub key: String,
    /// Zero-based display position
    pub idx: usize,
    /// Whether the cell can be edited in place
    pub editable: bool,
    /// Name of a custom editor, if the column has one
    pub editor: Option<String>,
    pub value_getter: Option<ValueGetter<R>>,
}

impl<R> Column<R> {
    /// Read-only column with no editor and no value getter
    pub fn new(key: impl Into<String>, idx: usize) -> Self {
        Self {
            key: key.into(),
            idx,
            editable: false,
            editor: None,
            value_getter: None,
        }
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    pub fn with_value_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.value_getter = Some(Arc::new(getter));
        self
    }

    pub fn has_editor(&self) -> bool {
        self.editor.is_some()
    }

    pub fn has_value_getter(&self) -> bool {
        self.value_getter.is_some()
    }

    /// Pasted text may only land in columns that are editable or carry a
    /// custom editor.
    pub fn accepts_paste(&self) -> bool {
        self.editable || self.has_editor()
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            idx: self.idx,
            editable: self.editable,
            editor: self.editor.clone(),
            value_getter: self.value_getter.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("idx", &self.idx)
            .field("editable", &self.editable)
            .field("editor", &self.editor)
            .field("value_getter", &self.has_value_getter())
            .finish()
    }
}

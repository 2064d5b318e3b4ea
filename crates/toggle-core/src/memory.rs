//! In-memory document for hosts without a DOM.
//!
//! Nodes behave like their browser counterparts for the two properties the
//! toggle touches: the inline `display` value and the class list.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::element::{Control, Panel, PanelSource, ToggleError};

#[derive(Debug, Default)]
pub struct MemoryNode {
    display: RefCell<String>,
    classes: RefCell<Vec<String>>,
    writes: Cell<usize>,
}

impl MemoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(display: &str) -> Self {
        let node = Self::default();
        *node.display.borrow_mut() = display.to_string();
        node
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let node = Self::default();
        node.classes
            .borrow_mut()
            .extend(classes.iter().map(|c| c.to_string()));
        node
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Number of mutations applied to this node.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Panel for MemoryNode {
    fn display(&self) -> String {
        self.display.borrow().clone()
    }

    fn set_display(&self, value: &str) -> Result<(), ToggleError> {
        *self.display.borrow_mut() = value.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl Control for MemoryNode {
    fn has_marker(&self, marker: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == marker)
    }

    fn set_marker(&self, marker: &str, present: bool) -> Result<(), ToggleError> {
        let mut classes = self.classes.borrow_mut();
        let pos = classes.iter().position(|c| c == marker);
        match (pos, present) {
            (None, true) => classes.push(marker.to_string()),
            (Some(i), false) => {
                classes.remove(i);
            }
            _ => {}
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Id-addressed collection of [`MemoryNode`]s.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: HashMap<String, Rc<MemoryNode>>,
    unstyled: Vec<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `id`, replacing any previous node.
    pub fn insert(&mut self, id: &str, node: MemoryNode) -> Rc<MemoryNode> {
        let node = Rc::new(node);
        self.nodes.insert(id.to_string(), node.clone());
        node
    }

    /// Register an id that resolves to a node without inline style.
    pub fn insert_unstyled(&mut self, id: &str) {
        self.unstyled.push(id.to_string());
    }
}

impl PanelSource for MemoryDocument {
    type Panel = Rc<MemoryNode>;

    fn find_panel(&self, id: &str) -> Result<Self::Panel, ToggleError> {
        if let Some(node) = self.nodes.get(id) {
            return Ok(node.clone());
        }
        if self.unstyled.iter().any(|u| u == id) {
            return Err(ToggleError::Unstylable { id: id.to_string() });
        }
        Err(ToggleError::MissingElement { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_marker_is_idempotent() {
        let node = MemoryNode::new();
        node.set_marker("open", true).unwrap();
        node.set_marker("open", true).unwrap();
        assert_eq!(node.classes(), vec!["open".to_string()]);
        node.set_marker("open", false).unwrap();
        node.set_marker("open", false).unwrap();
        assert!(node.classes().is_empty());
    }

    #[test]
    fn lookup_distinguishes_missing_and_unstyled() {
        let mut doc = MemoryDocument::new();
        doc.insert("faq", MemoryNode::new());
        doc.insert_unstyled("icon");
        assert!(doc.find_panel("faq").is_ok());
        assert_eq!(
            doc.find_panel("icon").unwrap_err(),
            ToggleError::Unstylable { id: "icon".into() }
        );
        assert_eq!(
            doc.find_panel("nope").unwrap_err(),
            ToggleError::MissingElement { id: "nope".into() }
        );
    }
}

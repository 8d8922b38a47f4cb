//! Host UI-tree node that widgets mount into.
//!
//! [`MountPoint`] stands in for the embedding application's container node.
//! It only tracks child elements and their attributes, which is enough to
//! render markup and confirm what a mounted widget inserted.

use std::fmt::Write as _;

/// A child element inserted by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute, builder style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Container node owned by the embedding application.
#[derive(Debug, Clone)]
pub struct MountPoint {
    tag: String,
    children: Vec<Element>,
    next_id: u64,
}

impl Default for MountPoint {
    fn default() -> Self {
        Self::new("div")
    }
}

impl MountPoint {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends `element`, assigning it a unique id derived from `prefix`.
    ///
    /// Returns the assigned id.
    pub fn insert(&mut self, prefix: &str, mut element: Element) -> String {
        element.id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        let id = element.id.clone();
        self.children.push(element);
        id
    }

    /// Removes the element with `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let index = self.children.iter().position(|el| el.id == id)?;
        Some(self.children.remove(index))
    }

    /// First child with the given tag.
    pub fn query_selector(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|el| el.tag == tag)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.children.iter().find(|el| el.id == id)
    }

    /// Number of children with the given tag.
    pub fn count(&self, tag: &str) -> usize {
        self.children.iter().filter(|el| el.tag == tag).count()
    }

    /// Renders the node and its children as markup.
    pub fn to_markup(&self) -> String {
        let mut out = format!("<{}>", self.tag);
        for child in &self.children {
            let _ = write!(out, "<{} id=\"{}\"", child.tag, child.id);
            for (name, value) in &child.attributes {
                let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
            }
            let _ = write!(out, "></{}>", child.tag);
        }
        let _ = write!(out, "</{}>", self.tag);
        out
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

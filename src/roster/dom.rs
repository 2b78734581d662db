//! # Document
//!
//! A small headless element tree standing in for the host page. Components
//! build their markup here and the CLI reads it back for printing, so the
//! library never touches a terminal.
//!
//! Elements live in an arena and are addressed by [`ElementId`]. Removing an
//! element frees its whole subtree; freed ids are never handed out again, so a
//! stale id simply stops resolving.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub hidden: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// The three places components are allowed to mount into.
#[derive(Debug, Clone, Copy)]
pub struct Mounts {
    pub body: ElementId,
    pub search_container: ElementId,
    pub gallery: ElementId,
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Option<Element>>,
    mounts: Mounts,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty page with a body, a search container and a gallery.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            mounts: Mounts {
                body: ElementId(0),
                search_container: ElementId(0),
                gallery: ElementId(0),
            },
        };
        let body = doc.create_element("body");
        let header = doc.create_element("header");
        doc.add_class(header, "header-container");
        let search_container = doc.create_element("div");
        doc.add_class(search_container, "search-container");
        let gallery = doc.create_element("div");
        doc.set_id(gallery, "gallery");
        doc.add_class(gallery, "gallery");

        doc.append_child(body, header);
        doc.append_child(header, search_container);
        doc.append_child(body, gallery);
        doc.mounts = Mounts {
            body,
            search_container,
            gallery,
        };
        doc
    }

    pub fn mounts(&self) -> Mounts {
        self.mounts
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Some(Element {
            tag: tag.to_string(),
            ..Element::default()
        }));
        id
    }

    /// Appends `child` as the last child of `parent`, detaching it first if
    /// it already has a parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        self.detach(child);
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Detaches `id` from its parent and frees it with all descendants.
    /// Removing an already removed element is a no-op.
    pub fn remove(&mut self, id: ElementId) {
        if self.get(id).is_none() {
            return;
        }
        self.detach(id);
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.get_mut(next.0).and_then(Option::take) {
                pending.extend(node.children);
            }
        }
    }

    fn detach(&mut self, id: ElementId) {
        let parent = self.get(id).and_then(|e| e.parent);
        if let Some(parent) = parent {
            if let Some(node) = self.get_mut(parent) {
                node.children.retain(|&c| c != id);
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(Element::children).unwrap_or(&[])
    }

    /// Depth-first search below `root` (inclusive) for an element with `id`.
    pub fn get_element_by_id(&self, root: ElementId, id: &str) -> Option<ElementId> {
        self.find(root, |e| e.id.as_deref() == Some(id))
    }

    /// First element under `root` (inclusive, document order) matching `pred`.
    pub fn find<F>(&self, root: ElementId, pred: F) -> Option<ElementId>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.get(id).is_some_and(&pred))
    }

    /// All elements under `root` in document order, `root` first.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                out.push(id);
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// `id` followed by its parent chain up to the root.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut cursor = self.get(id).map(|_| id);
        while let Some(current) = cursor {
            out.push(current);
            cursor = self.get(current).and_then(|e| e.parent);
        }
        out
    }

    /// Concatenated text of the element and its descendants.
    pub fn text_content(&self, id: ElementId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.get(d))
            .map(|e| e.text.as_str())
            .collect()
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(node) = self.get_mut(id) {
            node.text = text.into();
        }
    }

    pub fn set_id(&mut self, id: ElementId, value: &str) {
        if let Some(node) = self.get_mut(id) {
            node.id = Some(value.to_string());
        }
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.get_mut(id) {
            node.attrs.insert(name.to_string(), value.into());
        }
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.get_mut(id) {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(node) = self.get_mut(id) {
            node.hidden = hidden;
        }
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.get(id).is_some_and(|e| e.hidden)
    }

    /// Shorthand used by the markup builders: create, classify, fill, append.
    pub fn append_new(
        &mut self,
        parent: ElementId,
        tag: &str,
        classes: &[&str],
        text: &str,
    ) -> ElementId {
        let el = self.create_element(tag);
        for class in classes {
            self.add_class(el, class);
        }
        self.set_text(el, text);
        self.append_child(parent, el);
        el
    }
}

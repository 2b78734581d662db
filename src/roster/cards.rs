//! # Card Renderer
//!
//! Builds one summary card per record and remembers which element belongs to
//! which email. Click attribution and carousel navigation go through that
//! mapping; the email text inside the card is for display only.

use crate::dom::{Document, ElementId};
use crate::format::{formatted_cell, full_name};
use crate::model::PersonRecord;
use crate::store::DirectoryStore;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub element: ElementId,
    pub email: String,
    /// The `h3.card-name` element the search filter matches against.
    pub name: ElementId,
}

#[derive(Debug, Default)]
pub struct CardRenderer {
    cards: Vec<RenderedCard>,
    by_element: HashMap<ElementId, usize>,
}

impl CardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card for every record, in store order, to the gallery.
    pub fn render_all(&mut self, doc: &mut Document, store: &DirectoryStore) {
        let gallery = doc.mounts().gallery;
        for record in store.records() {
            let card = self.create_card(doc, record);
            doc.append_child(gallery, card.element);
            self.by_element.insert(card.element, self.cards.len());
            self.cards.push(card);
        }
        tracing::debug!(count = self.cards.len(), "cards rendered");
    }

    fn create_card(&self, doc: &mut Document, record: &PersonRecord) -> RenderedCard {
        let name = full_name(record);

        let card = doc.create_element("div");
        doc.add_class(card, "card");

        let image_container = doc.append_new(card, "div", &["card-image-container"], "");
        let img = doc.append_new(image_container, "img", &["card-img"], "");
        doc.set_attr(img, "src", record.image());
        doc.set_attr(img, "alt", name.clone());

        let info = doc.append_new(card, "div", &["card-info-container"], "");
        let name_el = doc.append_new(info, "h3", &["card-name", "cap"], &name);
        doc.append_new(info, "p", &["card-text"], record.email());
        doc.append_new(info, "p", &["card-text", "cap"], &formatted_cell(record));
        doc.append_new(info, "p", &["card-text", "cap"], record.city());

        RenderedCard {
            element: card,
            email: record.email().to_string(),
            name: name_el,
        }
    }

    /// All cards in render order.
    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not hidden by the search filter, in render order.
    pub fn visible<'a>(&'a self, doc: &Document) -> Vec<&'a RenderedCard> {
        self.cards
            .iter()
            .filter(|c| !doc.is_hidden(c.element))
            .collect()
    }

    /// The card element `target` sits in, if any. A click on any descendant of
    /// a card counts as a click on the card.
    pub fn card_for(&self, doc: &Document, target: ElementId) -> Option<&RenderedCard> {
        doc.ancestors(target)
            .into_iter()
            .find_map(|id| self.by_element.get(&id))
            .map(|&i| &self.cards[i])
    }

    pub fn by_element(&self, element: ElementId) -> Option<&RenderedCard> {
        self.by_element.get(&element).map(|&i| &self.cards[i])
    }

    /// Position of `element` in render order.
    pub fn position(&self, element: ElementId) -> Option<usize> {
        self.by_element.get(&element).copied()
    }
}

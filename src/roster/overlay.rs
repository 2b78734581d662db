//! # Detail Overlay
//!
//! The modal showing one record in full, with a carousel over the cards that
//! are visible *at the moment of navigation*.
//!
//! ```text
//!            open(card)                 next / prev
//!   Closed ─────────────▶ Open(active) ◀────────────┐
//!     ▲                        │  └──────────────────┘
//!     └──────── close ─────────┘
//! ```
//!
//! The active card is an explicit field of [`OverlayState::Open`]. The card
//! also gets the `active` class so printers can highlight it, but nothing
//! reads the class back.
//!
//! When the active card has been hidden by a search since the overlay opened,
//! navigation continues from its render position: `next` moves to the first
//! visible card after it and `prev` to the last visible card before it, both
//! wrapping. With nothing visible, navigation closes the overlay.

use crate::cards::CardRenderer;
use crate::dom::{Document, ElementId};
use crate::format::{formatted_birthday, formatted_cell, full_name};
use crate::model::PersonRecord;
use crate::store::DirectoryStore;

pub const ACTIVE_CLASS: &str = "active";
pub const BIRTHDAY_LABEL: &str = "Birthday: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Carousel step over a list of `len` items. `len` must be non-zero.
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Prev => (index + len - 1) % len,
    }
}

/// Elements of an open overlay whose content is replaced on navigation.
#[derive(Debug, Clone)]
pub struct OverlayElements {
    pub root: ElementId,
    pub image: ElementId,
    pub name: ElementId,
    pub email: ElementId,
    pub city: ElementId,
    pub cell: ElementId,
    pub address: ElementId,
    pub birthday: ElementId,
    pub close: ElementId,
    pub prev: ElementId,
    pub next: ElementId,
}

#[derive(Debug, Clone)]
pub enum OverlayState {
    Closed,
    Open {
        /// The card whose record is on display.
        active: ElementId,
        email: String,
        elements: OverlayElements,
    },
}

/// The overlay control a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Close,
    Prev,
    Next,
}

#[derive(Debug)]
pub struct DetailOverlay {
    state: OverlayState,
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Closed,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    /// Email of the record on display.
    pub fn current_email(&self) -> Option<&str> {
        match &self.state {
            OverlayState::Open { email, .. } => Some(email),
            OverlayState::Closed => None,
        }
    }

    pub fn active_card(&self) -> Option<ElementId> {
        match &self.state {
            OverlayState::Open { active, .. } => Some(*active),
            OverlayState::Closed => None,
        }
    }

    pub fn elements(&self) -> Option<&OverlayElements> {
        match &self.state {
            OverlayState::Open { elements, .. } => Some(elements),
            OverlayState::Closed => None,
        }
    }

    /// Opens the overlay for `card`. Returns `false` without touching the page
    /// when the card is unknown or its email is not in the store.
    ///
    /// An overlay that is already open is closed first.
    pub fn open(
        &mut self,
        doc: &mut Document,
        store: &DirectoryStore,
        cards: &CardRenderer,
        card: ElementId,
    ) -> bool {
        let Some(rendered) = cards.by_element(card) else {
            return false;
        };
        let Some(record) = store.find_by_email(&rendered.email) else {
            tracing::warn!(email = %rendered.email, "no record for card, overlay not opened");
            return false;
        };

        self.close(doc);
        let elements = create_markup(doc, record);
        doc.add_class(card, ACTIVE_CLASS);
        tracing::debug!(email = record.email(), "overlay opened");
        self.state = OverlayState::Open {
            active: card,
            email: record.email().to_string(),
            elements,
        };
        true
    }

    /// Removes the active marker and the overlay markup. No-op when closed.
    pub fn close(&mut self, doc: &mut Document) {
        if let OverlayState::Open {
            active, elements, ..
        } = std::mem::replace(&mut self.state, OverlayState::Closed)
        {
            doc.remove_class(active, ACTIVE_CLASS);
            doc.remove(elements.root);
            tracing::debug!("overlay closed");
        }
    }

    /// Moves to the neighbouring visible card and rewrites the overlay content
    /// in place. Returns `false` when nothing changed.
    pub fn navigate(
        &mut self,
        doc: &mut Document,
        store: &DirectoryStore,
        cards: &CardRenderer,
        direction: Direction,
    ) -> bool {
        let OverlayState::Open { active, .. } = &self.state else {
            return false;
        };
        let active = *active;

        let visible: Vec<ElementId> = cards.visible(doc).iter().map(|c| c.element).collect();
        if visible.is_empty() {
            tracing::debug!("no visible cards left, closing overlay");
            self.close(doc);
            return false;
        }

        let target = match visible.iter().position(|&id| id == active) {
            Some(i) => visible[step(i, visible.len(), direction)],
            None => nearest_visible(cards, &visible, active, direction),
        };

        let Some(email) = cards.by_element(target).map(|c| c.email.clone()) else {
            return false;
        };
        let Some(record) = store.find_by_email(&email) else {
            tracing::warn!(email = %email, "no record for card, overlay left unchanged");
            return false;
        };

        if let OverlayState::Open {
            active,
            email: current,
            elements,
        } = &mut self.state
        {
            fill(doc, elements, record);
            doc.remove_class(*active, ACTIVE_CLASS);
            doc.add_class(target, ACTIVE_CLASS);
            *active = target;
            *current = email;
        }
        true
    }

    /// Which overlay control, if any, `target` belongs to.
    pub fn control_for(&self, doc: &Document, target: ElementId) -> Option<Control> {
        let elements = self.elements()?;
        doc.ancestors(target).into_iter().find_map(|id| {
            if id == elements.close {
                Some(Control::Close)
            } else if id == elements.prev {
                Some(Control::Prev)
            } else if id == elements.next {
                Some(Control::Next)
            } else {
                None
            }
        })
    }

    /// True when `target` is inside the overlay markup.
    pub fn contains(&self, doc: &Document, target: ElementId) -> bool {
        self.elements()
            .is_some_and(|e| doc.ancestors(target).contains(&e.root))
    }
}

/// Picks the visible card closest to `active` in render order, in `direction`,
/// wrapping around. `visible` must be non-empty and in render order.
fn nearest_visible(
    cards: &CardRenderer,
    visible: &[ElementId],
    active: ElementId,
    direction: Direction,
) -> ElementId {
    let origin = cards.position(active).unwrap_or(0);
    let positions: Vec<(usize, ElementId)> = visible
        .iter()
        .filter_map(|&id| cards.position(id).map(|p| (p, id)))
        .collect();

    let picked = match direction {
        Direction::Next => positions
            .iter()
            .find(|(p, _)| *p > origin)
            .or_else(|| positions.first()),
        Direction::Prev => positions
            .iter()
            .rev()
            .find(|(p, _)| *p < origin)
            .or_else(|| positions.last()),
    };
    picked.map(|&(_, id)| id).unwrap_or(visible[0])
}

fn create_markup(doc: &mut Document, record: &PersonRecord) -> OverlayElements {
    let body = doc.mounts().body;
    let root = doc.append_new(body, "div", &["modal-container"], "");
    let modal = doc.append_new(root, "div", &["modal"], "");

    let close = doc.append_new(modal, "button", &["modal-close-btn"], "");
    doc.set_id(close, "modal-close");
    doc.set_attr(close, "type", "button");
    doc.append_new(close, "strong", &[], "+");

    let info = doc.append_new(modal, "div", &["modal-info-container"], "");
    let image = doc.append_new(info, "img", &["modal-img"], "");
    let name = doc.append_new(info, "h3", &["modal-name", "cap"], "");
    let email = doc.append_new(info, "p", &["modal-text"], "");
    let city = doc.append_new(info, "p", &["modal-text", "cap"], "");
    doc.append_new(info, "hr", &[], "");
    let cell = doc.append_new(info, "p", &["modal-text"], "");
    let address = doc.append_new(info, "p", &["modal-text"], "");
    let birthday = doc.append_new(info, "p", &["modal-text"], "");

    let buttons = doc.append_new(root, "div", &["modal-btn-container"], "");
    let prev = doc.append_new(buttons, "button", &["modal-prev", "btn"], "Prev");
    doc.set_id(prev, "modal-prev");
    doc.set_attr(prev, "type", "button");
    let next = doc.append_new(buttons, "button", &["modal-next", "btn"], "Next");
    doc.set_id(next, "modal-next");
    doc.set_attr(next, "type", "button");

    let elements = OverlayElements {
        root,
        image,
        name,
        email,
        city,
        cell,
        address,
        birthday,
        close,
        prev,
        next,
    };
    fill(doc, &elements, record);
    elements
}

fn fill(doc: &mut Document, elements: &OverlayElements, record: &PersonRecord) {
    let name = full_name(record);
    doc.set_attr(elements.image, "src", record.image());
    doc.set_attr(elements.image, "alt", name.clone());
    doc.set_text(elements.name, name);
    doc.set_text(elements.email, record.email());
    doc.set_text(elements.city, record.city());
    doc.set_text(elements.cell, formatted_cell(record));
    doc.set_text(elements.address, record.address());
    doc.set_text(
        elements.birthday,
        format!("{}{}", BIRTHDAY_LABEL, formatted_birthday(record)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::raw_person;
    use crate::search::SearchFilter;
    use proptest::prelude::*;

    struct Page {
        doc: Document,
        store: DirectoryStore,
        cards: CardRenderer,
        overlay: DetailOverlay,
    }

    impl Page {
        fn with(names: &[&str]) -> Self {
            let mut store = DirectoryStore::new();
            let raw = names
                .iter()
                .map(|n| raw_person(n, "Tester", &format!("{}@example.test", n.to_lowercase())))
                .collect();
            store.load(raw).unwrap();
            let mut doc = Document::new();
            let mut cards = CardRenderer::new();
            cards.render_all(&mut doc, &store);
            Self {
                doc,
                store,
                cards,
                overlay: DetailOverlay::new(),
            }
        }

        fn card(&self, i: usize) -> ElementId {
            self.cards.cards()[i].element
        }

        fn open(&mut self, i: usize) -> bool {
            let card = self.card(i);
            self.overlay.open(&mut self.doc, &self.store, &self.cards, card)
        }

        fn go(&mut self, direction: Direction) -> bool {
            self.overlay
                .navigate(&mut self.doc, &self.store, &self.cards, direction)
        }

        fn shown(&self) -> String {
            let elements = self.overlay.elements().unwrap();
            self.doc.get(elements.email).unwrap().text.clone()
        }

        fn active_cards(&self) -> Vec<ElementId> {
            self.cards
                .cards()
                .iter()
                .filter(|c| self.doc.has_class(c.element, ACTIVE_CLASS))
                .map(|c| c.element)
                .collect()
        }
    }

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(step(0, 3, Direction::Next), 1);
        assert_eq!(step(2, 3, Direction::Next), 0);
        assert_eq!(step(0, 3, Direction::Prev), 2);
        assert_eq!(step(0, 1, Direction::Next), 0);
        assert_eq!(step(0, 1, Direction::Prev), 0);
    }

    #[test]
    fn open_builds_the_detail_view() {
        let mut page = Page::with(&["Ann", "Bob", "Cy"]);
        assert!(page.open(1));
        assert!(page.overlay.is_open());
        assert_eq!(page.overlay.current_email(), Some("bob@example.test"));
        assert_eq!(page.active_cards(), vec![page.card(1)]);

        let e = page.overlay.elements().unwrap().clone();
        let doc = &page.doc;
        assert_eq!(doc.children(doc.mounts().body).last(), Some(&e.root));
        assert_eq!(doc.get(e.name).unwrap().text, "Bob Tester");
        assert_eq!(doc.get(e.city).unwrap().text, "Springfield");
        assert_eq!(doc.get(e.cell).unwrap().text, "(555) 010-2030");
        assert_eq!(
            doc.get(e.address).unwrap().text,
            "42 Main Street, Springfield, Oregon, 97403"
        );
        assert_eq!(doc.get(e.birthday).unwrap().text, "Birthday: 3/7/1992");
        assert_eq!(doc.get(e.image).unwrap().attr("alt"), Some("Bob Tester"));
        assert_eq!(doc.get_element_by_id(e.root, "modal-next"), Some(e.next));
    }

    #[test]
    fn next_and_prev_wrap_over_all_cards() {
        let mut page = Page::with(&["Ann", "Bob", "Cy"]);
        page.open(2);
        let root = page.overlay.elements().unwrap().root;

        assert!(page.go(Direction::Next));
        assert_eq!(page.shown(), "ann@example.test");
        assert_eq!(page.active_cards(), vec![page.card(0)]);
        // Content is replaced in place.
        assert_eq!(page.overlay.elements().unwrap().root, root);

        assert!(page.go(Direction::Prev));
        assert_eq!(page.shown(), "cy@example.test");
        assert!(page.go(Direction::Prev));
        assert_eq!(page.shown(), "bob@example.test");
        assert_eq!(page.active_cards(), vec![page.card(1)]);
    }

    #[test]
    fn navigation_follows_the_current_search() {
        let mut page = Page::with(&["Ann", "Bob", "Anna", "Cy"]);
        let mut search = SearchFilter::create(&mut page.doc);
        page.open(0);
        search.apply(&mut page.doc, &page.cards, "ann");

        page.go(Direction::Next);
        assert_eq!(page.shown(), "anna@example.test");
        page.go(Direction::Next);
        assert_eq!(page.shown(), "ann@example.test");
    }

    #[test]
    fn single_visible_card_stays_put() {
        let mut page = Page::with(&["Ann", "Bob"]);
        let mut search = SearchFilter::create(&mut page.doc);
        page.open(1);
        search.apply(&mut page.doc, &page.cards, "bob");

        page.go(Direction::Next);
        assert_eq!(page.shown(), "bob@example.test");
        page.go(Direction::Prev);
        assert_eq!(page.shown(), "bob@example.test");
    }

    #[test]
    fn hidden_active_card_moves_to_nearest_visible() {
        let mut page = Page::with(&["Ann", "Bob", "Cy", "Dee"]);
        page.open(1);
        page.doc.set_hidden(page.card(1), true);
        page.doc.set_hidden(page.card(2), true);

        page.go(Direction::Next);
        assert_eq!(page.shown(), "dee@example.test");

        page.doc.set_hidden(page.card(1), false);
        page.doc.set_hidden(page.card(3), true);
        page.go(Direction::Prev);
        assert_eq!(page.shown(), "bob@example.test");

        // Wraps when nothing visible lies beyond the hidden card.
        let mut page = Page::with(&["Ann", "Bob", "Cy"]);
        page.open(2);
        page.doc.set_hidden(page.card(2), true);
        page.go(Direction::Next);
        assert_eq!(page.shown(), "ann@example.test");
        assert_eq!(page.active_cards(), vec![page.card(0)]);
    }

    #[test]
    fn navigation_with_nothing_visible_closes() {
        let mut page = Page::with(&["Ann", "Bob"]);
        let mut search = SearchFilter::create(&mut page.doc);
        page.open(0);
        let root = page.overlay.elements().unwrap().root;
        search.apply(&mut page.doc, &page.cards, "zzz");

        assert!(!page.go(Direction::Next));
        assert!(!page.overlay.is_open());
        assert!(!page.doc.contains(root));
        assert!(page.active_cards().is_empty());
    }

    #[test]
    fn close_destroys_markup_and_marker() {
        let mut page = Page::with(&["Ann", "Bob"]);
        page.open(0);
        page.go(Direction::Next);
        let root = page.overlay.elements().unwrap().root;

        page.overlay.close(&mut page.doc);
        assert!(!page.overlay.is_open());
        assert!(!page.doc.contains(root));
        assert!(page.active_cards().is_empty());
        assert!(page
            .doc
            .find(page.doc.mounts().body, |e| e.has_class("modal-container"))
            .is_none());

        // Closing twice and navigating while closed are no-ops.
        page.overlay.close(&mut page.doc);
        assert!(!page.go(Direction::Next));
    }

    #[test]
    fn unknown_card_does_not_open() {
        let mut page = Page::with(&["Ann"]);
        let gallery = page.doc.mounts().gallery;
        assert!(!page
            .overlay
            .open(&mut page.doc, &page.store, &page.cards, gallery));
        assert!(!page.overlay.is_open());
    }

    #[test]
    fn lookup_miss_leaves_overlay_closed() {
        let mut page = Page::with(&["Ann"]);
        let empty = DirectoryStore::new();
        let card = page.card(0);
        assert!(!page.overlay.open(&mut page.doc, &empty, &page.cards, card));
        assert!(page.active_cards().is_empty());
    }

    #[test]
    fn controls_are_resolved_from_descendants() {
        let mut page = Page::with(&["Ann"]);
        page.open(0);
        let e = page.overlay.elements().unwrap().clone();
        let strong = page.doc.children(e.close)[0];
        assert_eq!(page.overlay.control_for(&page.doc, strong), Some(Control::Close));
        assert_eq!(page.overlay.control_for(&page.doc, e.prev), Some(Control::Prev));
        assert_eq!(page.overlay.control_for(&page.doc, e.next), Some(Control::Next));
        assert_eq!(page.overlay.control_for(&page.doc, e.name), None);
        assert!(page.overlay.contains(&page.doc, e.name));
        assert!(!page.overlay.contains(&page.doc, page.card(0)));
    }

    proptest! {
        #[test]
        fn step_stays_in_range_and_inverts(len in 1usize..50, seed in 0usize..1000) {
            let i = seed % len;
            let next = step(i, len, Direction::Next);
            let prev = step(i, len, Direction::Prev);
            prop_assert_eq!(next, (i + 1) % len);
            prop_assert_eq!(prev, (i + len - 1) % len);
            prop_assert_eq!(step(next, len, Direction::Prev), i);
        }
    }
}

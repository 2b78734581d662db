//! # Page Facade
//!
//! [`Page`] is the single entry point for UI clients. It owns the document,
//! the directory store, the rendered cards, the search control and the detail
//! overlay, and turns user input (clicks, keystrokes) into component calls.
//!
//! Like the rest of the library it does no I/O: clients read the outcome back
//! through [`Page::card_views`] and [`Page::overlay_view`], which are extracted
//! from the document itself.

use crate::cards::CardRenderer;
use crate::dom::{Document, ElementId};
use crate::error::Result;
use crate::model::RawPerson;
use crate::overlay::{Control, DetailOverlay, Direction};
use crate::search::SearchFilter;
use crate::store::DirectoryStore;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened,
    Navigated,
    Closed,
    Ignored,
}

/// A piece of element text plus whether the element asks for capitalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub cap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// 1-based position among the visible cards.
    pub position: usize,
    pub element: ElementId,
    pub active: bool,
    pub image: String,
    /// Name, email, phone and city, in markup order.
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub image: String,
    /// Name, email, city, phone, address and birthday, in markup order.
    pub lines: Vec<Line>,
}

#[derive(Debug, Default)]
pub struct Page {
    doc: Document,
    store: DirectoryStore,
    cards: CardRenderer,
    search: Option<SearchFilter>,
    overlay: DetailOverlay,
}

impl Page {
    /// An empty page: no records, no cards, no search control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store, then renders the cards, then the search control.
    pub(crate) fn populate(&mut self, raw: Vec<RawPerson>) -> Result<()> {
        self.store.load(raw)?;
        self.cards.render_all(&mut self.doc, &self.store);
        self.search = Some(SearchFilter::create(&mut self.doc));
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn cards(&self) -> &CardRenderer {
        &self.cards
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn search(&self) -> Option<&SearchFilter> {
        self.search.as_ref()
    }

    /// Dispatches a click on `target`.
    ///
    /// While the overlay is open only its controls respond; the cards beneath
    /// it can't be reached.
    pub fn click(&mut self, target: ElementId) -> ClickOutcome {
        if self.overlay.is_open() {
            return match self.overlay.control_for(&self.doc, target) {
                Some(Control::Close) => {
                    self.overlay.close(&mut self.doc);
                    ClickOutcome::Closed
                }
                Some(Control::Next) => self.step(Direction::Next),
                Some(Control::Prev) => self.step(Direction::Prev),
                None => ClickOutcome::Ignored,
            };
        }

        let Some(card) = self.cards.card_for(&self.doc, target).map(|c| c.element) else {
            return ClickOutcome::Ignored;
        };
        if self
            .overlay
            .open(&mut self.doc, &self.store, &self.cards, card)
        {
            ClickOutcome::Opened
        } else {
            ClickOutcome::Ignored
        }
    }

    fn step(&mut self, direction: Direction) -> ClickOutcome {
        let moved = self
            .overlay
            .navigate(&mut self.doc, &self.store, &self.cards, direction);
        if moved {
            ClickOutcome::Navigated
        } else if self.overlay.is_open() {
            ClickOutcome::Ignored
        } else {
            ClickOutcome::Closed
        }
    }

    /// Replaces the search field value and re-filters. Returns the number of
    /// visible cards. Before bootstrap there is no field and nothing happens.
    pub fn type_query(&mut self, query: &str) -> usize {
        match self.search.as_mut() {
            Some(search) => search.apply(&mut self.doc, &self.cards, query),
            None => 0,
        }
    }

    pub fn query(&self) -> &str {
        self.search
            .as_ref()
            .map(|s| s.query(&self.doc))
            .unwrap_or("")
    }

    /// Clicks the card at 1-based `position` among the visible cards.
    pub fn open_visible(&mut self, position: usize) -> ClickOutcome {
        match self.visible_card(position) {
            Some(card) => self.click(card),
            None => ClickOutcome::Ignored,
        }
    }

    pub fn next(&mut self) -> ClickOutcome {
        self.click_control(|e| e.next)
    }

    pub fn prev(&mut self) -> ClickOutcome {
        self.click_control(|e| e.prev)
    }

    pub fn close(&mut self) -> ClickOutcome {
        self.click_control(|e| e.close)
    }

    fn click_control<F>(&mut self, pick: F) -> ClickOutcome
    where
        F: Fn(&crate::overlay::OverlayElements) -> ElementId,
    {
        match self.overlay.elements().map(pick) {
            Some(control) => self.click(control),
            None => ClickOutcome::Ignored,
        }
    }

    /// Element of the visible card at 1-based `position`.
    pub fn visible_card(&self, position: usize) -> Option<ElementId> {
        position
            .checked_sub(1)
            .and_then(|i| self.cards.visible(&self.doc).get(i).map(|c| c.element))
    }

    pub fn card_views(&self) -> Vec<CardView> {
        self.cards
            .visible(&self.doc)
            .into_iter()
            .enumerate()
            .map(|(i, card)| CardView {
                position: i + 1,
                element: card.element,
                active: self.doc.has_class(card.element, crate::overlay::ACTIVE_CLASS),
                image: self.image_src(card.element),
                lines: self.lines(card.element, &["card-name", "card-text"]),
            })
            .collect()
    }

    pub fn overlay_view(&self) -> Option<OverlayView> {
        let elements = self.overlay.elements()?;
        Some(OverlayView {
            image: self.image_src(elements.root),
            lines: self.lines(elements.root, &["modal-name", "modal-text"]),
        })
    }

    /// Text of the "No results found" element while it is on the page.
    pub fn no_results_message(&self) -> Option<String> {
        let el = self.search.as_ref()?.no_results()?;
        Some(self.doc.text_content(el))
    }

    fn image_src(&self, root: ElementId) -> String {
        self.doc
            .find(root, |e| e.tag == "img")
            .and_then(|img| self.doc.get(img))
            .and_then(|e| e.attr("src"))
            .unwrap_or_default()
            .to_string()
    }

    fn lines(&self, root: ElementId, classes: &[&str]) -> Vec<Line> {
        self.doc
            .descendants(root)
            .into_iter()
            .filter_map(|id| self.doc.get(id))
            .filter(|e| classes.iter().any(|c| e.has_class(c)))
            .map(|e| Line {
                text: e.text.clone(),
                cap: e.has_class("cap"),
            })
            .collect()
    }
}

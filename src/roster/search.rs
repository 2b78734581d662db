//! # Search Filter
//!
//! Hides every card whose displayed name does not contain the query
//! (case-insensitive) and keeps a single "No results found" element in the
//! gallery while nothing is visible.

use crate::cards::CardRenderer;
use crate::dom::{Document, ElementId};

pub const NO_RESULTS_ID: &str = "no-results";
pub const NO_RESULTS_TEXT: &str = "No results found";
pub const PLACEHOLDER: &str = "Search...";

#[derive(Debug)]
pub struct SearchFilter {
    input: ElementId,
    no_results: Option<ElementId>,
}

impl SearchFilter {
    /// Inserts the search form into the search container.
    pub fn create(doc: &mut Document) -> Self {
        let container = doc.mounts().search_container;
        let form = doc.create_element("form");
        doc.set_id(form, "search-form");
        doc.set_attr(form, "action", "#");
        doc.set_attr(form, "method", "get");
        doc.append_child(container, form);

        let input = doc.append_new(form, "input", &["search-input"], "");
        doc.set_id(input, "search-input");
        doc.set_attr(input, "type", "search");
        doc.set_attr(input, "placeholder", PLACEHOLDER);
        doc.set_attr(input, "value", "");

        Self {
            input,
            no_results: None,
        }
    }

    pub fn input(&self) -> ElementId {
        self.input
    }

    /// The current value of the search field.
    pub fn query<'a>(&self, doc: &'a Document) -> &'a str {
        doc.get(self.input)
            .and_then(|e| e.attr("value"))
            .unwrap_or("")
    }

    /// Sets the field to `query` and re-filters, as one keystroke would.
    /// Returns the number of visible cards.
    pub fn apply(&mut self, doc: &mut Document, cards: &CardRenderer, query: &str) -> usize {
        doc.set_attr(self.input, "value", query);
        let needle = query.to_lowercase();

        let mut visible = 0;
        for card in cards.cards() {
            let name = doc
                .get(card.name)
                .map(|e| e.text.to_lowercase())
                .unwrap_or_default();
            let matched = name.contains(&needle);
            doc.set_hidden(card.element, !matched);
            if matched {
                visible += 1;
            }
        }

        self.sync_no_results(doc, visible);
        tracing::debug!(query, visible, "search applied");
        visible
    }

    fn sync_no_results(&mut self, doc: &mut Document, visible: usize) {
        match (visible, self.no_results) {
            (0, None) => {
                let gallery = doc.mounts().gallery;
                let el = doc.append_new(gallery, "p", &[], NO_RESULTS_TEXT);
                doc.set_id(el, NO_RESULTS_ID);
                self.no_results = Some(el);
            }
            (n, Some(el)) if n > 0 => {
                doc.remove(el);
                self.no_results = None;
            }
            _ => {}
        }
    }

    pub fn no_results(&self) -> Option<ElementId> {
        self.no_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::raw_person;
    use crate::store::DirectoryStore;
    use proptest::prelude::*;

    const NAMES: [(&str, &str); 4] = [
        ("Ann", "Lee"),
        ("Bob", "Ray"),
        ("Anna", "Moe"),
        ("Zed", "Annex"),
    ];

    fn setup() -> (Document, CardRenderer, SearchFilter) {
        let mut store = DirectoryStore::new();
        let raw = NAMES
            .iter()
            .map(|(f, l)| raw_person(f, l, &format!("{}@example.test", f.to_lowercase())))
            .collect();
        store.load(raw).unwrap();
        let mut doc = Document::new();
        let mut cards = CardRenderer::new();
        cards.render_all(&mut doc, &store);
        let search = SearchFilter::create(&mut doc);
        (doc, cards, search)
    }

    fn no_results_count(doc: &Document) -> usize {
        doc.descendants(doc.mounts().gallery)
            .into_iter()
            .filter(|&id| doc.get(id).unwrap().id.as_deref() == Some(NO_RESULTS_ID))
            .count()
    }

    #[test]
    fn form_is_mounted_in_search_container() {
        let (doc, _cards, search) = setup();
        let container = doc.mounts().search_container;
        assert_eq!(doc.get_element_by_id(container, "search-input"), Some(search.input()));
        assert_eq!(
            doc.get(search.input()).unwrap().attr("placeholder"),
            Some("Search...")
        );
    }

    #[test]
    fn filters_case_insensitively_on_full_name() {
        let (mut doc, cards, mut search) = setup();
        let visible = search.apply(&mut doc, &cards, "ANN");
        assert_eq!(visible, 3);
        let shown: Vec<&str> = cards.visible(&doc).iter().map(|c| c.email.as_str()).collect();
        assert_eq!(shown, ["ann@example.test", "anna@example.test", "zed@example.test"]);
        assert_eq!(search.query(&doc), "ANN");
    }

    #[test]
    fn empty_query_shows_everything() {
        let (mut doc, cards, mut search) = setup();
        search.apply(&mut doc, &cards, "bob");
        assert_eq!(search.apply(&mut doc, &cards, ""), 4);
        assert!(cards.cards().iter().all(|c| !doc.is_hidden(c.element)));
    }

    #[test]
    fn no_results_message_is_idempotent() {
        let (mut doc, cards, mut search) = setup();
        assert_eq!(search.apply(&mut doc, &cards, "xyz"), 0);
        assert_eq!(no_results_count(&doc), 1);
        search.apply(&mut doc, &cards, "xyzz");
        assert_eq!(no_results_count(&doc), 1);

        let el = search.no_results().unwrap();
        assert_eq!(doc.text_content(el), NO_RESULTS_TEXT);

        search.apply(&mut doc, &cards, "b");
        assert_eq!(no_results_count(&doc), 0);
        assert!(search.no_results().is_none());
        search.apply(&mut doc, &cards, "bo");
        assert_eq!(no_results_count(&doc), 0);
    }

    proptest! {
        #[test]
        fn visible_set_matches_substring_rule(query in "[a-zA-Z ]{0,4}") {
            let (mut doc, cards, mut search) = setup();
            let count = search.apply(&mut doc, &cards, &query);
            let needle = query.to_lowercase();
            let expected: Vec<usize> = NAMES
                .iter()
                .enumerate()
                .filter(|(_, (f, l))| format!("{} {}", f, l).to_lowercase().contains(&needle))
                .map(|(i, _)| i)
                .collect();
            let actual: Vec<usize> = cards
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, c)| !doc.is_hidden(c.element))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(&actual, &expected);
            prop_assert_eq!(count, expected.len());
            prop_assert_eq!(no_results_count(&doc), usize::from(count == 0));
        }
    }
}

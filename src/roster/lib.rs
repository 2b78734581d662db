//! # Roster Architecture
//!
//! Roster is a **UI-agnostic staff directory library**. It fetches a list of
//! people once, renders them as cards into a headless [`dom::Document`], filters
//! them by name and pages through them in a detail overlay. The bundled CLI is
//! one client of it; a web front end could drive the same [`page::Page`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints the page, reads stdin commands  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page (page.rs, bootstrap.rs)                               │
//! │  - Owns document, store, cards, search field and overlay    │
//! │  - Turns clicks and keystrokes into component calls         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (cards.rs, search.rs, overlay.rs)               │
//! │  - Build markup in the document, track visibility/active    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (model.rs, format.rs, store.rs) and provider/         │
//! │  - PersonRecord, display formatting, the directory store    │
//! │  - PeopleProvider trait: HTTP, file, in-memory              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Below the CLI, code never writes to stdout/stderr and never exits the
//! process. The only I/O is the provider fetch, and it sits behind a trait.
//! Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`bootstrap`]: fetch → load → render cards → render search
//! - [`page`]: the facade UI clients talk to
//! - [`cards`], [`search`], [`overlay`]: the page components
//! - [`dom`]: headless element tree
//! - [`model`], [`format`], [`store`]: records, display strings, the store
//! - [`provider`]: where records come from
//! - [`config`]: endpoint configuration
//! - [`error`]: error types

pub mod bootstrap;
pub mod cards;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod model;
pub mod overlay;
pub mod page;
pub mod provider;
pub mod search;
pub mod store;

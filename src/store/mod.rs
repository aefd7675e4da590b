//! Keyword-addressed snippet storage backed by `SQLite`.
//!
//! This module provides the persistent store behind the `snip` CLI. A
//! [`SnippetStore`] owns a single database connection; callers construct one
//! and pass it wherever snippet access is needed.
//!
//! # Usage
//!
//! ```ignore
//! use snip::store::SnippetStore;
//!
//! // Open (or create) the store
//! let mut store = SnippetStore::open("~/.local/share/snip/snippets.db")?;
//!
//! // Store and fetch
//! store.put("list", "A sequence of things", None)?;
//! if let Some(snip) = store.get("list")? {
//!     println!("{}", snip.message);
//! }
//!
//! // Enumerate and search
//! for keyword in store.catalog()? {
//!     println!("{keyword}");
//! }
//! for hit in store.search("sequence")? {
//!     println!("{}: {}", hit.keyword, hit.message);
//! }
//! ```

mod db;
mod snippet;

pub use db::SnippetStore;
pub use snippet::Snippet;

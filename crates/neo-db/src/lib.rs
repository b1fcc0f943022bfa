//! # neo-db
//!
//! Persistence for neowatch: the shared record collection and the views
//! derived from it.
//!
//! The collection holds `user` and `watch` records of every user and is
//! broadcast whole after each change ([`store`]). The signed-in user's
//! watchlist ([`watchlist`]) and profile lookup ([`profiles`]) are
//! predicates over those snapshots.
//!
//! Uses the `libsql` crate (C `SQLite` fork) for the local database.

pub mod error;
pub mod helpers;
mod migrations;
pub mod profiles;
pub mod store;
pub mod watchlist;

pub use error::{DatabaseError, ProfileError, WatchlistError};
pub use store::{LibsqlRecordStore, RecordStore, Snapshot};
pub use watchlist::{RemoveOutcome, ToggleOutcome, WatchlistStore};

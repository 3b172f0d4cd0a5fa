//! Library side of the `trimshop` vehicle catalog CLI.
//!
//! Filtering, ingestion and search live in `trimshop-catalog`; this crate adds
//! the pieces that touch the outside world: loading catalog sources, terminal
//! presentation, persisted client state and the contact channels.

pub mod app_dirs;
pub mod contact;
pub mod loader;
pub mod logging;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

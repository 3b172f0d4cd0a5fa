//! Configuration loading and resolution utilities.
//!
//! `load` layers default files, explicit `--config` files, `TRIMSHOP__*`
//! environment variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
#[cfg(test)]
pub(crate) use resolved::{CatalogSettings, ContactSettings};

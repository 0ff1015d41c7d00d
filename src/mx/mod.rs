//! DNS MX resolution (optional `with-mx` feature).
//!
//! [`check_mx`] performs a synchronous lookup with the system resolver and
//! returns an [`MxLookup`] whose first record is the primary exchange. The
//! verification chain never depends on this; it only annotates output.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::check_mx;
pub use types::{MxLookup, MxRecord};

#[cfg(test)]
mod tests;

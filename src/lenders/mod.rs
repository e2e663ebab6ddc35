//! Affiliated lender lookup.
//!
//! After a successful calculation the raw loan details are sent to a lender
//! directory, which returns a list of lenders to show as links. The lookup
//! runs as its own task and any failure simply means no list is shown.

mod directory;
mod lookup;

pub use directory::{FileLenderDirectory, HttpLenderDirectory, LenderDirectory, LenderSource};
pub use lookup::LenderLookup;

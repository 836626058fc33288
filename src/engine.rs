//! The personnummer pipeline.
//!
//! ```text
//! input ── extract (extract.rs) ── century? YYMMDD delimiter? NNNN
//!                                          │
//!                                          v
//!                           resolve (date.rs) ── BirthDate
//!                                          │
//!                  ┌───────────────────────┼─────────────────────┐
//!                  v                       v                     v
//!        region::lookup (eager)   Gender::from_serial   checksum / format
//!                                      (eager)              (on demand)
//! ```
//!
//! Every step is a pure function; "now" only enters through the reference
//! date carried by [`Context`](crate::Context).

#[path = "engine/checksum.rs"]
mod checksum;
#[path = "engine/date.rs"]
mod date;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/format.rs"]
mod format;
#[path = "engine/region.rs"]
mod region;

pub(crate) use checksum::is_valid;
pub use date::BirthDate;
pub(crate) use date::resolve;
pub(crate) use extract::extract;
pub(crate) use format::format;
pub use region::Region;
pub(crate) use region::lookup as lookup_region;

//! Pagination module
//!
//! Ashby list endpoints use a cursor protocol: the request carries `limit`
//! and, after the first page, `cursor`; the response carries `results`,
//! `moreDataAvailable`, and `nextCursor`.
//!
//! # Overview
//!
//! `PageEnvelope` decodes one page. `CursorPaginator` drives the request
//! executor page by page and exposes the items as a single lazy stream.

mod cursor;
mod types;

pub use cursor::{CursorPaginator, ItemStream};
pub use types::{PageEnvelope, PaginationState};

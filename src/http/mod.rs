//! HTTP module
//!
//! Two layers:
//!
//! - **Transport**: sends a POST with a JSON body (or a plain GET for file
//!   downloads) and hands back status plus raw body. `ReqwestTransport` is the
//!   default implementation.
//! - **RequestExecutor**: builds authenticated API calls and classifies each
//!   response into a result payload or one of the crate's error kinds.
//!
//! Neither layer retries.

mod executor;
mod transport;

pub use executor::RequestExecutor;
pub use transport::{filename_from_disposition, ReqwestTransport, Transport, TransportResponse};

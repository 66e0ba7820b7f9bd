pub mod cdn;
pub mod endpoints;
pub mod ext;
pub mod routes;
pub mod transport;

mod config;
pub use config::ProxyConfig;

mod error;
pub use error::{
    Error, ErrorEnvelope, ErrorKind, JsonErrorCode, RequestSummary, ResponseSummary, RestError, Result,
};

mod query;
pub use query::Query;

mod request;
pub use request::{Request, APPLICATION_JSON, AUDIT_LOG_REASON};

mod session;
pub use session::{CancelHandle, Context, Session};

pub use transport::{check_response, DirectTransport, File, ProxyTransport, Transport};

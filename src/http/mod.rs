//! HTTP capability used by the probes.
//!
//! * [`HttpClient`]: async trait the probes depend on.
//! * [`ReqwestClient`]: production implementation.
//! * [`HttpRequest`] / [`HttpResponse`]: plain owned request/response data.
//! * [`HttpError`]: transport failures.
//!
//! Unit tests swap in `ScriptedClient`, which replays canned responses.

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, Method, ReqwestClient, USER_AGENT,
};

#[cfg(test)]
pub use mock::ScriptedClient;

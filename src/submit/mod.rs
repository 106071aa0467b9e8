//! Submission pipeline.
//!
//! Sends injection requests to the analyzer and routes the outcome to a
//! notification sink.

mod config;
mod http;
mod notify;
mod pipeline;

pub use config::{ClientConfig, DEFAULT_BASE_URL, INJECT_PATH};
pub use http::{HttpClient, HttpResponse, JSON_CONTENT_TYPE, ReqwestClient};
pub use notify::{Notification, Notifier};
pub use pipeline::{SUCCESS_MESSAGE, Submitter};

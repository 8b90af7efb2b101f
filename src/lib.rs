//! Terminal task list client backed by a remote todo service.
//!
//! State lives in three layers: the pure domain (task collection, filter
//! engine, edit session), the remote store client that speaks the service's
//! REST contract, and a terminal display adapter on top. The collection only
//! ever changes after the server has confirmed a mutation.

pub mod app;
pub mod domain;
pub mod input;
pub mod notify;
pub mod remote;
pub mod ui;

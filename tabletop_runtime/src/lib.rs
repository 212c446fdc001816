#![forbid(unsafe_code)]

//! Tabletop Runtime
//!
//! Async service around the tabletop engine: a session manager over a
//! pluggable store, procedural and LLM content sources, YAML
//! configuration and the HTTP API.
//!
//! Scenario rules, scoring and transitions stay in `tabletop_engine`;
//! this crate only sequences them and decides what gets stored.

pub mod bootstrap;
pub mod config;
pub mod content_source;
pub mod dto;
pub mod error;
pub mod gemini;
pub mod llm;
pub mod llm_source;
pub mod logging;
pub mod server;
pub mod session;
pub mod store;

pub use config::RuntimeConfig;
pub use content_source::{ContentSource, ProceduralSource};
pub use error::{ErrorCode, SessionError};
pub use session::{ChoiceOutcome, SessionManager, Started};
pub use store::{InMemorySessionStore, SessionStore};

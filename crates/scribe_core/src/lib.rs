//! Core data types for the Scribe video-essay generator.
//!
//! This crate provides the request/response types exchanged with model drivers
//! and the domain types a script run is assembled from.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod message;
mod output;
mod request;
mod role;
mod script;
mod topic;

pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use script::{
    DraftedSection, OutlineEntry, Script, SectionFailure, Theme, count_words,
};
pub use topic::Topic;

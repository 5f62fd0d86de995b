pub mod actions;
pub mod client;
pub mod render;

pub use crate::domain::model::{Post, RenderTarget, RequestDraft, WireRequest, WireResponse};
pub use crate::domain::ports::{OutputSink, Transport};
pub use crate::utils::error::Result;

//! Server-Sent Events (SSE) emitter core.
//!
//! This crate owns the streaming protocol surface: what a frame looks like
//! on the wire, how frames are paced, and which cache-control header style
//! the response carries. The web layer turns the emitter's frame stream into
//! an HTTP response body; nothing in here depends on HTTP types.
//!
//! # Architecture
//!
//! - **One emitter per request**: each incoming stream request builds its own
//!   [`Emitter`] from immutable settings; no state is shared across requests.
//! - **Paced frames**: the emitter yields one frame per payload unit and
//!   sleeps for the configured delay between frames. Every yielded frame is
//!   transmitted (and therefore flushed) individually by the HTTP layer.
//! - **Unified variants**: the raw byte-per-character stream and the framed
//!   `event:message` stream are the same emitter with different
//!   [`FrameStyle`] settings.
//!
//! # Modules
//!
//! - `emitter`: [`EmitterSettings`], [`FrameStyle`], and the frame stream
//! - `headers`: response header constants and [`CacheControlStyle`]

pub mod emitter;
pub mod headers;

pub use emitter::{Emitter, EmitterSettings, FrameStyle};
pub use headers::CacheControlStyle;

use crate::headers::CacheControlStyle;
use async_stream::stream;
use bytes::Bytes;
use futures::Stream;
use log::*;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How each payload unit is framed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStyle {
    /// One frame per character containing the character's raw UTF-8 bytes.
    Bytes,
    /// One `event:message` SSE event per character.
    Event,
}

impl FrameStyle {
    /// Build the wire frame for a single payload character.
    pub fn frame(&self, ch: char) -> Bytes {
        match self {
            FrameStyle::Bytes => Bytes::from(ch.to_string()),
            FrameStyle::Event => Bytes::from(format!("event:message\ndata:{ch}\n\n")),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FrameStyleParseError;

impl FromStr for FrameStyle {
    type Err = FrameStyleParseError;
    fn from_str(style: &str) -> Result<FrameStyle, Self::Err> {
        match style.to_lowercase().as_str() {
            "bytes" => Ok(FrameStyle::Bytes),
            "event" => Ok(FrameStyle::Event),
            _ => Err(FrameStyleParseError),
        }
    }
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrameStyle::Bytes => write!(f, "bytes"),
            FrameStyle::Event => write!(f, "event"),
        }
    }
}

/// Immutable per-request streaming configuration.
///
/// Fixed at startup from the service configuration and cloned into each
/// request's [`Emitter`], so concurrent requests stay independent.
#[derive(Clone, Debug)]
pub struct EmitterSettings {
    /// The fixed payload streamed to every client.
    pub payload: String,
    /// Wall-clock delay between consecutive frames.
    pub unit_delay: Duration,
    /// How many times each character's frame is re-sent before advancing.
    /// The default is 1; the framed-event variant of the original handler
    /// used 10. A value of 0 behaves as 1.
    pub units_per_char: u32,
    /// Wire framing of each unit.
    pub frame_style: FrameStyle,
    /// Which header spelling carries the no-cache directive.
    pub cache_control_style: CacheControlStyle,
}

impl EmitterSettings {
    fn repeats(&self) -> u32 {
        self.units_per_char.max(1)
    }

    /// Total number of frames a full stream will produce.
    pub fn total_units(&self) -> usize {
        self.payload.chars().count() * self.repeats() as usize
    }
}

/// Streams one payload to one client, one paced frame at a time.
pub struct Emitter {
    settings: EmitterSettings,
}

impl Emitter {
    pub fn new(settings: EmitterSettings) -> Self {
        Self { settings }
    }

    /// Consume the emitter and produce the paced frame stream.
    ///
    /// Frames are yielded strictly in payload order with `unit_delay` between
    /// consecutive frames; the trailing delay after the final frame is
    /// skipped, so a stream of N frames spans at least (N-1) * `unit_delay`.
    /// If the client disconnects, the HTTP layer stops polling and drops the
    /// stream; there is nothing to clean up beyond the future itself.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, Infallible>> {
        let repeats = self.settings.repeats();
        let total = self.settings.total_units();
        let EmitterSettings {
            payload,
            unit_delay,
            frame_style,
            ..
        } = self.settings;

        stream! {
            debug!("Streaming {total} frame(s) with {unit_delay:?} pacing");

            let mut emitted = 0usize;
            for ch in payload.chars() {
                for _ in 0..repeats {
                    if emitted > 0 {
                        tokio::time::sleep(unit_delay).await;
                    }
                    yield Ok::<Bytes, Infallible>(frame_style.frame(ch));
                    emitted += 1;
                }
            }

            debug!("Stream complete after {emitted} frame(s)");
        }
    }
}

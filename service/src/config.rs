use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use sse::{CacheControlStyle, EmitterSettings, FrameStyle};
use std::time::Duration;

const DEFAULT_PAYLOAD: &str = "Hello World!";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 8080)]
    pub port: u16,

    /// The fixed payload streamed to every client of the stream endpoint
    #[arg(long, env, default_value = DEFAULT_PAYLOAD)]
    pub payload: String,

    /// Milliseconds to wait between consecutive streamed frames
    #[arg(long, env, default_value_t = 100)]
    pub unit_delay_ms: u64,

    /// How many times each payload character is re-sent before advancing.
    /// Set to 10 with --frame-style event to reproduce the framed variant
    /// of the original handler.
    #[arg(long, env, default_value_t = 1)]
    pub units_per_char: u32,

    /// Wire framing of each streamed unit: raw payload bytes or framed
    /// `event:message` SSE events
    #[arg(
        long,
        env,
        default_value_t = FrameStyle::Bytes,
        value_parser = clap::builder::PossibleValuesParser::new(["bytes", "event"])
            .map(|s| s.parse::<FrameStyle>().unwrap()),
        )]
    pub frame_style: FrameStyle,

    /// Which header spelling carries the no-cache directive on streamed
    /// responses
    #[arg(
        long,
        env,
        default_value_t = CacheControlStyle::CacheControl,
        value_parser = clap::builder::PossibleValuesParser::new(["cache-control", "pragma"])
            .map(|s| s.parse::<CacheControlStyle>().unwrap()),
        )]
    pub cache_control_style: CacheControlStyle,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// The emitter configuration derived from the streaming flags.
    pub fn emitter_settings(&self) -> EmitterSettings {
        EmitterSettings {
            payload: self.payload.clone(),
            unit_delay: Duration::from_millis(self.unit_delay_ms),
            units_per_char: self.units_per_char,
            frame_style: self.frame_style,
            cache_control_style: self.cache_control_style,
        }
    }
}

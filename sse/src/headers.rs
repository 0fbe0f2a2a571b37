use std::fmt;
use std::str::FromStr;

/// Content type sent with every streamed response.
pub const CONTENT_TYPE_EVENT_STREAM: &str = "text/event-stream;charset=UTF-8";

/// Value of the `Connection` header on streamed responses.
pub const CONNECTION_KEEP_ALIVE: &str = "keep-alive";

/// Value shared by both cache-control header styles.
pub const NO_CACHE: &str = "no-cache";

/// Which header carries the no-cache directive on the streamed response.
///
/// The two original handler variants disagreed on the header name; both are
/// semantically equivalent for SSE, so the choice is configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheControlStyle {
    /// `Cache-Control: no-cache`
    CacheControl,
    /// `Pragma: no-cache` (the legacy HTTP/1.0 spelling)
    Pragma,
}

impl CacheControlStyle {
    pub fn header_name(&self) -> &'static str {
        match self {
            CacheControlStyle::CacheControl => "Cache-Control",
            CacheControlStyle::Pragma => "Pragma",
        }
    }

    pub fn header_value(&self) -> &'static str {
        NO_CACHE
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CacheControlStyleParseError;

impl FromStr for CacheControlStyle {
    type Err = CacheControlStyleParseError;
    fn from_str(style: &str) -> Result<CacheControlStyle, Self::Err> {
        match style.to_lowercase().as_str() {
            "cache-control" => Ok(CacheControlStyle::CacheControl),
            "pragma" => Ok(CacheControlStyle::Pragma),
            _ => Err(CacheControlStyleParseError),
        }
    }
}

impl fmt::Display for CacheControlStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CacheControlStyle::CacheControl => write!(f, "cache-control"),
            CacheControlStyle::Pragma => write!(f, "pragma"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_style_parses_both_spellings() {
        assert_eq!(
            "cache-control".parse::<CacheControlStyle>(),
            Ok(CacheControlStyle::CacheControl)
        );
        assert_eq!(
            "Pragma".parse::<CacheControlStyle>(),
            Ok(CacheControlStyle::Pragma),
            "parsing should be case-insensitive"
        );
        assert_eq!(
            "expires".parse::<CacheControlStyle>(),
            Err(CacheControlStyleParseError)
        );
    }

    #[test]
    fn test_both_styles_carry_no_cache() {
        assert_eq!(CacheControlStyle::CacheControl.header_name(), "Cache-Control");
        assert_eq!(CacheControlStyle::Pragma.header_name(), "Pragma");
        assert_eq!(CacheControlStyle::CacheControl.header_value(), "no-cache");
        assert_eq!(CacheControlStyle::Pragma.header_value(), "no-cache");
    }
}

use wayfind_core::format::OutputFormat;
use wayfind_core::graph::TravelMode;

/// Parse travel mode from string
pub fn parse_mode(s: &str) -> std::result::Result<TravelMode, String> {
    s.parse::<TravelMode>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

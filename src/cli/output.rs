pub use jotjot_core::format::OutputFormat;

/// clap value parser for `--format`
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

use std::fmt;
use std::str::FromStr;

use crate::coordinate::CoordinateSpec;
use crate::error::MeteomaticsError;
use crate::time_spec::TimeSpec;

/// Production Meteomatics API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.meteomatics.com";

/// Response format requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Netcdf,
}

impl OutputFormat {
    /// File extension used for default artifact paths.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Netcdf => "nc",
        }
    }

    /// Whether the response body is binary rather than text.
    pub fn is_binary(&self) -> bool {
        matches!(self, OutputFormat::Netcdf)
    }

    /// The format tag as it appears in the request URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Netcdf => "netcdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = MeteomaticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "netcdf" => Ok(OutputFormat::Netcdf),
            other => Err(MeteomaticsError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A fully-specified API query.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub time: TimeSpec,
    pub coordinates: CoordinateSpec,
    /// Comma-joined parameter identifiers, passed through unvalidated.
    pub parameters: String,
    pub format: OutputFormat,
}

impl RequestSpec {
    /// Assemble the request URL:
    /// `{base}/{start}--{end}:{interval}/{parameters}/{coordinates}/{format}`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.time.to_path_segment(),
            self.parameters,
            self.coordinates.to_path_segment(),
            self.format
        )
    }
}

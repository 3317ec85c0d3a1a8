//! Fetch implementation: build the query URL, perform one authenticated
//! GET, persist the raw response, and summarize JSON output.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use log::info;
use serde_json::Value;
use wxt_meteomatics::coordinate::CoordinateSpec;
use wxt_meteomatics::credentials::Credentials;
use wxt_meteomatics::request::{OutputFormat, RequestSpec, DEFAULT_BASE_URL};
use wxt_meteomatics::response::{summarize, ResponsePayload};
use wxt_meteomatics::time_spec::TimeSpec;

/// Default parameter list: 2 m temperature, hourly precipitation, 10 m wind speed.
pub const DEFAULT_PARAMETERS: &str = "t_2m:C,precip_1h:mm,wind_speed_10m:ms";
/// Default query location: Berlin.
pub const DEFAULT_LATITUDE: f64 = 52.520551;
pub const DEFAULT_LONGITUDE: f64 = 13.461804;
pub const DEFAULT_INTERVAL: &str = "PT1H";
pub const DEFAULT_HOURS: i64 = 24;

/// Client-side timeout for the single API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// How much of a non-200 response body is echoed back to the user.
const BODY_PREVIEW_CHARS: usize = 500;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Latitude (point mode)
    #[arg(long, default_value_t = DEFAULT_LATITUDE)]
    pub lat: f64,

    /// Longitude (point mode)
    #[arg(long, default_value_t = DEFAULT_LONGITUDE)]
    pub lon: f64,

    /// Bounding box for grid mode as lat_min,lon_min,lat_max,lon_max
    #[arg(long)]
    pub bbox: Option<String>,

    /// Grid step as dlat,dlon (e.g. 0.05,0.05)
    #[arg(long)]
    pub grid_steps: Option<String>,

    /// Comma-separated parameter list (e.g. t_2m:C,precip_1h:mm)
    #[arg(short, long, default_value = DEFAULT_PARAMETERS)]
    pub parameters: String,

    /// Hours ahead from now (UTC); ignored if --start and --end are given
    #[arg(long, default_value_t = DEFAULT_HOURS)]
    pub hours: i64,

    /// Start time ISO8601 (e.g. 2025-10-01T00:00:00Z)
    #[arg(long)]
    pub start: Option<String>,

    /// End time ISO8601 (e.g. 2025-10-02T00:00:00Z)
    #[arg(long)]
    pub end: Option<String>,

    /// ISO-8601 interval step (e.g. PT1H)
    #[arg(long, default_value = DEFAULT_INTERVAL)]
    pub interval: String,

    /// Response format: json, csv or netcdf
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Meteomatics API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API username (overrides METEOMATICS_USERNAME)
    #[arg(long)]
    pub username: Option<String>,

    /// API password (overrides METEOMATICS_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,

    /// Output path for the raw response (defaults to data/meteomatics_<timestamp>.<ext>)
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Run a fetch against the Meteomatics API.
///
/// Configuration problems (bad bounding box or grid steps, unknown
/// format, missing credentials) fail before any network activity; a
/// non-200 response fails before anything is written to disk.
pub async fn run_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let format: OutputFormat = args.format.parse()?;

    let time = match (&args.start, &args.end) {
        (Some(start), Some(end)) => TimeSpec {
            start: start.clone(),
            end: end.clone(),
            interval: args.interval.clone(),
        },
        _ => TimeSpec::from_hours(args.hours, &args.interval),
    };

    // Grid mode needs both --bbox and --grid-steps; otherwise point mode.
    let coordinates = match (&args.bbox, &args.grid_steps) {
        (Some(bbox), Some(steps)) => CoordinateSpec::from_grid_args(bbox, steps)?,
        _ => CoordinateSpec::point(args.lat, args.lon),
    };

    let spec = RequestSpec {
        time,
        coordinates,
        parameters: args.parameters,
        format,
    };
    let url = spec.to_url(&args.base_url);

    let credentials = Credentials::resolve(args.username, args.password)?;

    info!("Requesting {}", url);
    let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&url)
        .basic_auth(&credentials.username, Some(&credentials.password))
        .send()
        .await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("HTTP {}: {}", status.as_u16(), body_preview(&body));
    }

    let timestamp_label = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let output_path = match &args.out {
        Some(out) => PathBuf::from(out),
        None => default_output_path(format, &timestamp_label),
    };

    if format == OutputFormat::Json {
        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))?;
        save_json(&payload, &output_path)?;
        println!("Saved raw response to {}", output_path.display());
        println!();
        println!("{}", summarize(&ResponsePayload::from_value(&payload)));
    } else if format.is_binary() {
        let body = response.bytes().await?;
        save_raw(&body, &output_path)?;
        println!("Saved raw response to {}", output_path.display());
    } else {
        let body = response.text().await?;
        save_raw(body.as_bytes(), &output_path)?;
        println!("Saved raw response to {}", output_path.display());
    }

    Ok(())
}

/// Default artifact path: `data/meteomatics_{timestamp}.{ext}`.
fn default_output_path(format: OutputFormat, timestamp_label: &str) -> PathBuf {
    PathBuf::from("data").join(format!(
        "meteomatics_{}.{}",
        timestamp_label,
        format.extension()
    ))
}

fn body_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

/// Pretty-print a JSON payload to `path`, creating parent directories.
fn save_json(payload: &Value, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(payload)?)?;
    Ok(())
}

/// Write a raw response body verbatim to `path`, creating parent directories.
fn save_raw(body: &[u8], path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{body_preview, default_output_path, save_json, save_raw};
    use std::path::PathBuf;
    use wxt_meteomatics::request::OutputFormat;

    #[test]
    fn test_default_output_path_per_format() {
        assert_eq!(
            default_output_path(OutputFormat::Json, "20240305T140211Z"),
            PathBuf::from("data/meteomatics_20240305T140211Z.json")
        );
        assert_eq!(
            default_output_path(OutputFormat::Csv, "20240305T140211Z"),
            PathBuf::from("data/meteomatics_20240305T140211Z.csv")
        );
        assert_eq!(
            default_output_path(OutputFormat::Netcdf, "20240305T140211Z"),
            PathBuf::from("data/meteomatics_20240305T140211Z.nc")
        );
    }

    #[test]
    fn test_body_preview_truncation() {
        assert_eq!(body_preview("short body"), "short body");

        let long = "x".repeat(1200);
        assert_eq!(body_preview(&long).len(), 500);

        // Truncation counts characters, not bytes.
        let multibyte = "é".repeat(600);
        assert_eq!(body_preview(&multibyte).chars().count(), 500);
    }

    #[test]
    fn test_save_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        let payload = serde_json::json!({
            "status": "OK",
            "data": [
                {"parameter": "t_2m:C", "coordinates": [{"lat": 1.0, "lon": 2.0, "dates": []}]}
            ]
        });

        save_json(&payload, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed, and re-parses to the same document.
        assert!(written.contains("\n  \"status\""));
        let reread: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, payload);
    }

    #[test]
    fn test_save_raw_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let body = b"station;value\nberlin;6.4\n";

        save_raw(body, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), body);
    }
}

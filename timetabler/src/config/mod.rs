//! Request file loading.
//!
//! A request file holds one [`ScheduleRequest`].  The format is chosen by
//! extension: `.yaml` / `.yml` are parsed as YAML, anything else as JSON.
//!
//! The expected YAML structure is:
//! ```yaml
//! teachers: [Ivanov, Petrova]
//! groups:
//!   - { name: IT-21, size: 25 }
//!   - { name: IT-22, size: 22 }
//! rooms:
//!   - { name: "101", capacity: 30 }
//!   - { name: Aula, capacity: 120 }
//! assignments:
//!   - { teacher: Ivanov, groups: [IT-21, IT-22], subject: Calculus, count: 2, type: lecture }
//!   - { teacher: Petrova, groups: [IT-21, IT-22], subject: Databases, count: 1, type: seminar }
//! teacherPrefs: { Petrova: "101" }
//! teacherBusy: { Ivanov: ["Mon 8:00"] }
//! days: [Mon, Tue, Wed]
//! times: ["8:00", "9:40", "11:20"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::payload::ScheduleRequest;

/// Serialisation format of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Yaml,
    Json,
}

impl RequestFormat {
    /// Pick the format from `path`'s extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => RequestFormat::Yaml,
            _ => RequestFormat::Json,
        }
    }
}

/// Parse a request from `content` in the given `format`.
pub fn parse_request(content: &str, format: RequestFormat) -> Result<ScheduleRequest> {
    let request = match format {
        RequestFormat::Yaml => {
            serde_yaml::from_str(content).context("Failed to parse YAML request")?
        }
        RequestFormat::Json => {
            serde_json::from_str(content).context("Failed to parse JSON request")?
        }
    };
    Ok(request)
}

/// Read and parse the request file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be opened or if it does not describe a
/// structurally valid request.
pub fn load_request(path: &Path) -> Result<ScheduleRequest> {
    let format = RequestFormat::from_path(path);
    info!("Loading request from: {} ({:?})", path.display(), format);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot open request file: {}", path.display()))?;

    let request = parse_request(&content, format)
        .with_context(|| format!("Invalid request file: {}", path.display()))?;

    debug!(
        teachers = request.teachers.len(),
        groups = request.groups.len(),
        rooms = request.rooms.len(),
        assignments = request.assignments.len(),
        days = request.days.len(),
        times = request.times.len(),
        "request loaded"
    );

    Ok(request)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

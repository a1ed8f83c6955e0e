//! Image pull progress events.
//!
//! The engine emits one JSON object per progress update. The fields used for
//! plain-text output are typed; every other field is kept as-is so JSON
//! output carries what the daemon sent.

use bollard::models::CreateImageInfo;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Byte counters attached to a download or extraction step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDetail {
    /// Bytes processed so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<i64>,
    /// Total bytes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// One progress event of an image pull.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullProgress {
    /// Human-readable status, e.g. `Downloading`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Layer ID or tag the status refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Pre-rendered progress bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    /// Byte counters behind `progress`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_detail: Option<ProgressDetail>,
    /// Remaining fields, e.g. `errorDetail`, emitted unchanged in JSON.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl PullProgress {
    /// Creates an event carrying only a status line.
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Sets the layer ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the rendered progress bar.
    #[must_use]
    pub fn with_progress(mut self, progress: impl Into<String>) -> Self {
        self.progress = Some(progress.into());
        self
    }

    /// Renders the event as newline-terminated plain-text lines.
    ///
    /// `"<status>: <id>"` (or `"<status>"` without an ID), followed by
    /// `"Progress: <bar>"` when a bar is present. Events with neither yield
    /// an empty string.
    #[must_use]
    pub fn to_pretty_lines(&self) -> String {
        let mut out = String::new();
        if let Some(status) = non_empty(self.status.as_deref()) {
            out.push_str(status);
            if let Some(id) = non_empty(self.id.as_deref()) {
                out.push_str(": ");
                out.push_str(id);
            }
            out.push('\n');
        }
        if let Some(progress) = non_empty(self.progress.as_deref()) {
            out.push_str("Progress: ");
            out.push_str(progress);
            out.push('\n');
        }
        out
    }

    /// Encodes the event as one newline-terminated JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl From<CreateImageInfo> for PullProgress {
    fn from(info: CreateImageInfo) -> Self {
        match serde_json::to_value(&info).and_then(serde_json::from_value::<Self>) {
            Ok(mut event) => {
                event.other.retain(|_, value| !value.is_null());
                event
            }
            Err(e) => {
                tracing::debug!(error = %e, "keeping only typed pull progress fields");
                Self {
                    status: info.status,
                    id: info.id,
                    progress: info.progress,
                    progress_detail: info.progress_detail.map(|detail| ProgressDetail {
                        current: detail.current,
                        total: detail.total,
                    }),
                    other: Map::new(),
                }
            }
        }
    }
}

//! Loading parameter documents from JSON files.
//!
//! Every loader returns the parsed document together with a BLAKE3 hash of
//! the file contents, so reports can identify exactly which input was used.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use yuragi_spec::{
    validate_channel_ids, ChannelId, ChannelParameterRecord, ChannelWaveformParameters,
    ValidationResult,
};

/// A parsed document and the hash of its source text.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    /// Parsed document.
    pub value: T,
    /// BLAKE3 hash (hex) of the file contents.
    pub source_hash: String,
}

/// Channel parameters loaded from a document.
#[derive(Debug, Clone)]
pub struct LoadedChannels {
    /// Parameters in render order.
    pub channels: Vec<ChannelWaveformParameters>,
    /// Column labels, one per channel.
    pub labels: Vec<String>,
    /// Problems with `channelId` values (records documents only).
    pub id_errors: ValidationResult,
}

/// Errors that can occur when loading a document.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::JsonParse { .. } => None,
        }
    }
}

fn read(path: &Path) -> Result<(String, String), InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
    Ok((content, source_hash))
}

fn parse<T: DeserializeOwned>(content: &str) -> Result<T, InputError> {
    serde_json::from_str(content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })
}

/// Loads any JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Loaded<T>, InputError> {
    let (content, source_hash) = read(path)?;
    log::debug!("loaded {} ({})", path.display(), &source_hash[..16]);
    Ok(Loaded {
        value: parse(&content)?,
        source_hash,
    })
}

/// Loads a channel document.
///
/// The document is a JSON array of either channel parameters (rendered in
/// array order) or server records carrying a `channelId` (rendered in
/// channel-id order). Records with an unknown `channelId` are reported in
/// [`LoadedChannels::id_errors`] and the channel list is left empty.
pub fn load_channels(path: &Path) -> Result<Loaded<LoadedChannels>, InputError> {
    let Loaded {
        value: document,
        source_hash,
    } = load_json::<serde_json::Value>(path)?;

    let is_records = document
        .as_array()
        .map(|entries| !entries.is_empty() && entries.iter().all(|e| e.get("channelId").is_some()))
        .unwrap_or(false);

    let value = if is_records {
        let id_errors = validate_channel_ids(&document);
        if id_errors.is_err() {
            LoadedChannels {
                channels: Vec::new(),
                labels: Vec::new(),
                id_errors,
            }
        } else {
            let mut records: Vec<ChannelParameterRecord> = from_value(document)?;
            records.sort_by_key(|r| r.channel_id.index());
            LoadedChannels {
                labels: records.iter().map(|r| r.channel_id.to_string()).collect(),
                channels: records.into_iter().map(|r| r.into_parameters()).collect(),
                id_errors,
            }
        }
    } else {
        let channels: Vec<ChannelWaveformParameters> = from_value(document)?;
        LoadedChannels {
            labels: default_labels(channels.len()),
            channels,
            id_errors: ValidationResult::new(),
        }
    };

    Ok(Loaded { value, source_hash })
}

fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, InputError> {
    serde_json::from_value(value).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })
}

/// Labels for a plain parameter list: channel names when there are exactly
/// four, otherwise positional names.
fn default_labels(count: usize) -> Vec<String> {
    if count == yuragi_spec::CHANNEL_IDS.len() {
        yuragi_spec::CHANNEL_IDS
            .iter()
            .map(ChannelId::to_string)
            .collect()
    } else {
        (0..count).map(|i| format!("channel{}", i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_parameter_list() {
        let file = write_temp(
            r#"[
                {"frequency": 60, "amplitude": 0.5, "phase": 0, "polarity": true},
                {"frequency": 80, "amplitude": 0.2, "phase": 90, "polarity": false, "isActive": false}
            ]"#,
        );
        let loaded = load_channels(file.path()).unwrap();
        assert_eq!(loaded.value.channels.len(), 2);
        assert!(!loaded.value.channels[1].is_active);
        assert_eq!(loaded.value.labels, vec!["channel0", "channel1"]);
        assert_eq!(loaded.source_hash.len(), 64);
    }

    #[test]
    fn test_load_records_sorted_by_channel() {
        let file = write_temp(
            r#"[
                {"channelId": 3, "frequency": 40, "amplitude": 0.3, "phase": 0, "polarity": true},
                {"channelId": 0, "frequency": 60, "amplitude": 0.5, "phase": 0, "polarity": false}
            ]"#,
        );
        let loaded = load_channels(file.path()).unwrap().value;
        assert_eq!(loaded.labels, vec!["device1-X", "device2-Y"]);
        assert_eq!(loaded.channels[0].frequency, 60.0);
        assert!(loaded.id_errors.is_ok());
    }

    #[test]
    fn test_unknown_channel_id_is_reported() {
        let file = write_temp(
            r#"[{"channelId": 9, "frequency": 40, "amplitude": 0.3, "phase": 0, "polarity": true}]"#,
        );
        let loaded = load_channels(file.path()).unwrap().value;
        assert!(loaded.channels.is_empty());
        assert_eq!(loaded.id_errors.errors.len(), 1);
    }

    #[test]
    fn test_missing_file_and_bad_json() {
        assert!(matches!(
            load_channels(Path::new("/nonexistent/channels.json")),
            Err(InputError::FileRead { .. })
        ));
        let file = write_temp("{not json");
        assert!(matches!(
            load_json::<serde_json::Value>(file.path()),
            Err(InputError::JsonParse { .. })
        ));
    }
}

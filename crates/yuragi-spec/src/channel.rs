//! Physical output channels and their waveform parameters.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::vector_force::DeviceId;

/// One of the four physical outputs (two devices, X and Y axis each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChannelId {
    /// Device 1, X axis.
    Device1X = 0,
    /// Device 1, Y axis.
    Device1Y = 1,
    /// Device 2, X axis.
    Device2X = 2,
    /// Device 2, Y axis.
    Device2Y = 3,
}

/// All channel ids in output order.
pub const CHANNEL_IDS: [ChannelId; 4] = [
    ChannelId::Device1X,
    ChannelId::Device1Y,
    ChannelId::Device2X,
    ChannelId::Device2Y,
];

/// Axis of a channel within its device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl ChannelId {
    /// Returns the numeric id used by the device server.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the device this channel belongs to.
    pub fn device(self) -> DeviceId {
        match self {
            ChannelId::Device1X | ChannelId::Device1Y => DeviceId::Device1,
            ChannelId::Device2X | ChannelId::Device2Y => DeviceId::Device2,
        }
    }

    /// Returns the axis this channel drives.
    pub fn axis(self) -> Axis {
        match self {
            ChannelId::Device1X | ChannelId::Device2X => Axis::X,
            ChannelId::Device1Y | ChannelId::Device2Y => Axis::Y,
        }
    }
}

impl TryFrom<u8> for ChannelId {
    type Error = SpecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChannelId::Device1X),
            1 => Ok(ChannelId::Device1Y),
            2 => Ok(ChannelId::Device2X),
            3 => Ok(ChannelId::Device2Y),
            other => Err(SpecError::UnknownChannel(other)),
        }
    }
}

impl From<ChannelId> for u8 {
    fn from(id: ChannelId) -> Self {
        id.index()
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let axis = match self.axis() {
            Axis::X => "X",
            Axis::Y => "Y",
        };
        write!(f, "device{}-{}", self.device().number(), axis)
    }
}

/// Waveform parameters for one output channel.
///
/// The dashboard constrains `frequency` to [0, 120] Hz, `amplitude` to [0, 1]
/// and `phase` to [0, 360) degrees; the generator accepts values outside those
/// ranges and processes them with the same formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelWaveformParameters {
    /// Sawtooth frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude. The sign is ignored; `polarity` sets direction.
    pub amplitude: f64,
    /// Phase offset in degrees.
    pub phase: f64,
    /// `true` for a rising ramp, `false` for a falling ramp.
    pub polarity: bool,
    /// Inactive channels render as silence.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for ChannelWaveformParameters {
    fn default() -> Self {
        Self {
            frequency: 60.0,
            amplitude: 0.0,
            phase: 0.0,
            polarity: true,
            is_active: true,
        }
    }
}

impl ChannelWaveformParameters {
    /// Creates active channel parameters.
    pub fn new(frequency: f64, amplitude: f64, phase: f64, polarity: bool) -> Self {
        Self {
            frequency,
            amplitude,
            phase,
            polarity,
            is_active: true,
        }
    }

    /// Returns a copy with the active flag cleared.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns true if this channel produces a non-silent signal.
    pub fn is_audible(&self) -> bool {
        self.is_active && self.amplitude != 0.0
    }
}

/// Channel parameters as exchanged with the device server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelParameterRecord {
    /// Target channel.
    pub channel_id: ChannelId,
    /// Sawtooth frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Phase offset in degrees.
    pub phase: f64,
    /// Ramp direction.
    pub polarity: bool,
}

impl ChannelParameterRecord {
    /// Creates a record for a channel.
    pub fn new(channel_id: ChannelId, params: &ChannelWaveformParameters) -> Self {
        Self {
            channel_id,
            frequency: params.frequency,
            amplitude: params.amplitude,
            phase: params.phase,
            polarity: params.polarity,
        }
    }

    /// Converts the record into active waveform parameters.
    pub fn into_parameters(self) -> ChannelWaveformParameters {
        ChannelWaveformParameters::new(self.frequency, self.amplitude, self.phase, self.polarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_ids_order_and_devices() {
        let indices: Vec<u8> = CHANNEL_IDS.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(ChannelId::Device2Y.device(), DeviceId::Device2);
        assert_eq!(ChannelId::Device1Y.axis(), Axis::Y);
        assert_eq!(ChannelId::Device2X.to_string(), "device2-X");
    }

    #[test]
    fn test_channel_id_try_from() {
        assert_eq!(ChannelId::try_from(2).unwrap(), ChannelId::Device2X);
        assert!(matches!(
            ChannelId::try_from(4),
            Err(SpecError::UnknownChannel(4))
        ));
    }

    #[test]
    fn test_record_serde_shape() {
        let json = r#"{"channelId":1,"frequency":60.0,"amplitude":0.5,"phase":90.0,"polarity":false}"#;
        let record: ChannelParameterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.channel_id, ChannelId::Device1Y);

        let params = record.into_parameters();
        assert_eq!(params, ChannelWaveformParameters::new(60.0, 0.5, 90.0, false));
        assert!(params.is_active);
    }

    #[test]
    fn test_record_rejects_unknown_channel() {
        let json = r#"{"channelId":7,"frequency":60.0,"amplitude":0.5,"phase":0.0,"polarity":true}"#;
        assert!(serde_json::from_str::<ChannelParameterRecord>(json).is_err());
    }

    #[test]
    fn test_parameters_default_active_flag() {
        let json = r#"{"frequency":30.0,"amplitude":0.2,"phase":0.0,"polarity":true}"#;
        let params: ChannelWaveformParameters = serde_json::from_str(json).unwrap();
        assert!(params.is_active);

        let value = serde_json::to_value(params.inactive()).unwrap();
        assert_eq!(value["isActive"], serde_json::json!(false));
    }
}

//! Polar "vector force" records and their decomposition into axis channels.

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelId, ChannelParameterRecord, ChannelWaveformParameters};
use crate::error::SpecError;

/// One of the two actuator devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DeviceId {
    /// First device (channels 0 and 1).
    Device1,
    /// Second device (channels 2 and 3).
    Device2,
}

impl DeviceId {
    /// Returns the 1-based device number used by the device server.
    pub fn number(self) -> u8 {
        match self {
            DeviceId::Device1 => 1,
            DeviceId::Device2 => 2,
        }
    }

    /// Returns the (X, Y) channel pair driven by this device.
    pub fn channels(self) -> (ChannelId, ChannelId) {
        match self {
            DeviceId::Device1 => (ChannelId::Device1X, ChannelId::Device1Y),
            DeviceId::Device2 => (ChannelId::Device2X, ChannelId::Device2Y),
        }
    }
}

impl TryFrom<u8> for DeviceId {
    type Error = SpecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DeviceId::Device1),
            2 => Ok(DeviceId::Device2),
            other => Err(SpecError::UnknownDevice(other)),
        }
    }
}

impl From<DeviceId> for u8 {
    fn from(id: DeviceId) -> Self {
        id.number()
    }
}

/// Desired 2-axis drive of one device in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorForce {
    /// Target device.
    pub device_id: DeviceId,
    /// Direction in degrees, counter-clockwise from +X.
    pub angle: f64,
    /// Force magnitude (amplitude scale).
    pub magnitude: f64,
    /// Drive frequency in Hz, shared by both axes.
    pub frequency: f64,
}

impl VectorForce {
    /// Creates a vector-force record.
    pub fn new(device_id: DeviceId, angle: f64, magnitude: f64, frequency: f64) -> Self {
        Self {
            device_id,
            angle,
            magnitude,
            frequency,
        }
    }

    /// Cartesian components `(magnitude·cos(angle), magnitude·sin(angle))`.
    pub fn components(&self) -> (f64, f64) {
        let radians = self.angle.to_radians();
        (
            self.magnitude * radians.cos(),
            self.magnitude * radians.sin(),
        )
    }

    /// Per-axis channel parameters `(x, y)`.
    ///
    /// Each axis takes `|component|` as amplitude and `component >= 0` as
    /// polarity. An axis with a zero component is marked inactive.
    pub fn to_channel_parameters(&self) -> (ChannelWaveformParameters, ChannelWaveformParameters) {
        let (x, y) = self.components();
        (self.axis_parameters(x), self.axis_parameters(y))
    }

    /// Per-axis parameters in the device server's record shape.
    pub fn to_channel_records(&self) -> [ChannelParameterRecord; 2] {
        let (x_channel, y_channel) = self.device_id.channels();
        let (x, y) = self.to_channel_parameters();
        [
            ChannelParameterRecord::new(x_channel, &x),
            ChannelParameterRecord::new(y_channel, &y),
        ]
    }

    fn axis_parameters(&self, component: f64) -> ChannelWaveformParameters {
        let mut params =
            ChannelWaveformParameters::new(self.frequency, component.abs(), 0.0, component >= 0.0);
        params.is_active = component != 0.0;
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_quadrants() {
        let force = VectorForce::new(DeviceId::Device1, 90.0, 2.0, 40.0);
        let (x, y) = force.components();
        assert!(x.abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);

        let force = VectorForce::new(DeviceId::Device1, 180.0, 1.0, 40.0);
        let (x, _) = force.components();
        assert!((x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_amplitude_and_polarity() {
        let force = VectorForce::new(DeviceId::Device2, 225.0, 1.0, 50.0);
        let (x, y) = force.to_channel_parameters();

        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((x.amplitude - expected).abs() < 1e-12);
        assert!((y.amplitude - expected).abs() < 1e-12);
        assert!(!x.polarity);
        assert!(!y.polarity);
        assert_eq!(x.frequency, 50.0);
    }

    #[test]
    fn test_records_target_device_channels() {
        let force = VectorForce::new(DeviceId::Device2, 0.0, 0.8, 30.0);
        let [x, y] = force.to_channel_records();
        assert_eq!(x.channel_id, ChannelId::Device2X);
        assert_eq!(y.channel_id, ChannelId::Device2Y);
        assert!((x.amplitude - 0.8).abs() < 1e-12);
        assert!(x.polarity);
    }

    #[test]
    fn test_zero_magnitude_marks_axes_inactive() {
        let force = VectorForce::new(DeviceId::Device1, 30.0, 0.0, 30.0);
        let (x, y) = force.to_channel_parameters();
        assert!(!x.is_active);
        assert!(!y.is_active);
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{"deviceId":2,"angle":45.0,"magnitude":0.5,"frequency":60.0}"#;
        let force: VectorForce = serde_json::from_str(json).unwrap();
        assert_eq!(force.device_id, DeviceId::Device2);
        assert!(serde_json::from_str::<VectorForce>(
            r#"{"deviceId":3,"angle":0.0,"magnitude":0.5,"frequency":60.0}"#
        )
        .is_err());
    }
}

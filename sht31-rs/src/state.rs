use crate::StatusRegister;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// The latest raw values read from the sensor.
///
/// A value only changes once a read has passed its checksum in full; a failed read leaves
/// the previous value in place. All fields start at zero.
pub struct SensorState {
    pub(crate) temperature: u16,
    pub(crate) humidity: u16,
    pub(crate) status: u16,
}

impl SensorState {
    /// Raw temperature code of the last successful measurement.
    pub fn temperature(&self) -> u16 {
        self.temperature
    }

    /// Raw relative humidity code of the last successful measurement.
    pub fn humidity(&self) -> u16 {
        self.humidity
    }

    /// Raw status register of the last successful status read.
    pub fn status_register(&self) -> u16 {
        self.status
    }

    /// Decoded status register of the last successful status read.
    pub fn status(&self) -> StatusRegister {
        StatusRegister::from_bits(self.status)
    }

    pub(crate) fn commit_measurement(&mut self, [temperature, humidity]: [u16; 2]) {
        self.temperature = temperature;
        self.humidity = humidity;
    }

    pub(crate) fn commit_status(&mut self, [status]: [u16; 1]) {
        self.status = status;
    }
}

use bitfield_struct::bitfield;

#[bitfield(u16)]
#[derive(PartialEq, Eq)]
/// Decoded view of the SHT3x status register.
pub struct StatusRegister {
    /// Checksum of the last write transfer failed.
    #[bits(1, access = RO)]
    pub write_checksum_failed: bool,
    /// Last command was not processed, it was either invalid or failed its checksum.
    #[bits(1, access = RO)]
    pub command_failed: bool,
    #[bits(2)]
    __: u8,
    /// A reset (power-on, soft or reset pin) was detected since the last clear.
    #[bits(1, access = RO)]
    pub reset_detected: bool,
    #[bits(5)]
    __: u8,
    /// Temperature tracking alert.
    #[bits(1, access = RO)]
    pub temperature_alert: bool,
    /// Humidity tracking alert.
    #[bits(1, access = RO)]
    pub humidity_alert: bool,
    #[bits(1)]
    __: u8,
    /// The internal heater is on.
    #[bits(1, access = RO)]
    pub heater_on: bool,
    #[bits(1)]
    __: u8,
    /// At least one alert is pending.
    #[bits(1, access = RO)]
    pub alert_pending: bool,
}

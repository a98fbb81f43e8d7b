use bitfield_struct::bitfield;

#[bitfield(u8)]
#[derive(PartialEq, Eq)]
/// Represents the slave address for the SHT3x sensor.
/// The address is 7 bits long. The default address is 0x44, selected when the ADDR pin
/// is tied low. Tying ADDR high selects 0x45, which is done by setting the `addr` bit.
pub struct SlaveAddress {
    /// Level of the ADDR pin.
    #[bits(1, default = false)]
    pub addr: bool,
    #[bits(7, default = 0x44 >> 1)]
    reserved: u8,
}

impl SlaveAddress {
    /// The 7-bit address placed on the bus.
    pub fn value(&self) -> u8 {
        self.into_bits()
    }
}

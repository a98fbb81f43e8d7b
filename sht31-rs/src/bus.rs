/// Byte-level access to a two-wire bus.
///
/// Each primitive is blocking. Acknowledge results are reported as `Ok(true)` when the
/// device acknowledged and `Ok(false)` otherwise; `Err` is reserved for faults of the bus
/// layer itself, such as a pin that cannot be driven or a clock that is never released.
pub trait TwoWireBus {
    /// Fault raised by the bus layer.
    type Error: core::fmt::Debug;

    /// Assert a start (or repeated start) condition.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Assert a stop condition.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Transmit one byte and report whether it was acknowledged.
    fn send_data(&mut self, byte: u8) -> Result<bool, Self::Error>;

    /// Clock in one byte. `ack` selects whether the byte is acknowledged; the last byte
    /// of a read is left unacknowledged.
    fn read_data(&mut self, ack: bool) -> Result<u8, Self::Error>;

    /// Transmit a 7-bit address with write intent.
    fn send_address_write(&mut self, address: u8) -> Result<bool, Self::Error> {
        self.send_data(address << 1)
    }

    /// Transmit a 7-bit address with read intent.
    fn send_address_read(&mut self, address: u8) -> Result<bool, Self::Error> {
        self.send_data((address << 1) | 1)
    }
}

impl<T: TwoWireBus + ?Sized> TwoWireBus for &mut T {
    type Error = T::Error;

    fn start(&mut self) -> Result<(), Self::Error> {
        T::start(self)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        T::stop(self)
    }

    fn send_data(&mut self, byte: u8) -> Result<bool, Self::Error> {
        T::send_data(self, byte)
    }

    fn read_data(&mut self, ack: bool) -> Result<u8, Self::Error> {
        T::read_data(self, ack)
    }

    fn send_address_write(&mut self, address: u8) -> Result<bool, Self::Error> {
        T::send_address_write(self, address)
    }

    fn send_address_read(&mut self, address: u8) -> Result<bool, Self::Error> {
        T::send_address_read(self, address)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The step of a transaction that was not acknowledged by the sensor.
pub enum Phase {
    /// The address byte with write intent.
    AddressWrite,
    /// The most significant byte of the command.
    CommandMsb,
    /// The least significant byte of the command.
    CommandLsb,
    /// The address byte with read intent.
    AddressRead,
}

#[derive(Debug, PartialEq, Eq)]
/// Represents errors that can occur while interacting with the SHT3x sensor.
pub enum Error<E> {
    /// The bus layer failed while carrying out a primitive.
    Bus(E),
    /// The sensor did not acknowledge a byte.
    Nack(Phase),
    /// A received word did not match its trailing checksum byte.
    Checksum {
        /// Position of the offending word within the read.
        index: usize,
        /// Checksum computed over the received data bytes.
        expected: u8,
        /// Checksum byte sent by the sensor.
        received: u8,
    },
    /// A raw repeatability or acquisition rate code was out of range.
    InvalidParameter,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

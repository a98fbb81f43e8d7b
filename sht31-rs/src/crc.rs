use ::crc::{CRC_8_NRSC_5, Crc};

/// CRC-8 with polynomial 0x31 (x^8 + x^5 + x^4 + 1), initial value 0xFF and no final XOR.
const SENSOR_CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// Compute the checksum the sensor appends to every 16-bit word, processed most
/// significant byte first.
pub fn checksum(word: u16) -> u8 {
    SENSOR_CRC.checksum(&word.to_be_bytes())
}

/// Check a received word against its checksum byte.
#[inline]
pub fn verify(word: u16, crc: u8) -> bool {
    checksum(word) == crc
}

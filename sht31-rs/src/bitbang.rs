use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};

use crate::TwoWireBus;

/// Default bus frequency, 100 kHz standard mode.
const DEFAULT_FREQUENCY_HZ: u32 = 100_000;
/// Default longest clock stretch tolerated, in microseconds.
const DEFAULT_STRETCH_LIMIT_US: u32 = 50_000;

#[derive(Debug, PartialEq, Eq)]
/// Errors raised by the bit-banged bus.
pub enum BitBangError<E> {
    /// A pin could not be driven or sampled.
    Pin(E),
    /// The device held the clock low for longer than the stretch limit.
    ClockStretchTimeout,
}

impl<E> From<E> for BitBangError<E> {
    fn from(e: E) -> Self {
        BitBangError::Pin(e)
    }
}

/// A [`TwoWireBus`] driven in software over two open-drain GPIO lines.
///
/// Both lines must be configured open-drain with a pull-up: `set_high` releases the
/// line and `is_high` samples the actual level. The clock line is sampled after every
/// release so that a device stretching the clock (as the SHT3x does while a single-shot
/// conversion runs) is waited for, up to the stretch limit.
pub struct BitBangBus<SDA, SCL, D> {
    sda: SDA,
    scl: SCL,
    delay: D,
    half_period_ns: u32,
    stretch_limit_us: u32,
}

impl<SDA, SCL, D, E> BitBangBus<SDA, SCL, D>
where
    SDA: InputPin<Error = E> + OutputPin<Error = E>,
    SCL: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
{
    /// Create a 100 kHz bus on the given lines.
    pub fn new(sda: SDA, scl: SCL, delay: D) -> Self {
        Self {
            sda,
            scl,
            delay,
            half_period_ns: 500_000_000 / DEFAULT_FREQUENCY_HZ,
            stretch_limit_us: DEFAULT_STRETCH_LIMIT_US,
        }
    }

    /// Set the clock frequency in hertz.
    pub fn with_frequency(mut self, hz: u32) -> Self {
        self.half_period_ns = 500_000_000 / hz.max(1);
        self
    }

    /// Set the longest clock stretch tolerated, in microseconds.
    pub fn with_stretch_limit(mut self, us: u32) -> Self {
        self.stretch_limit_us = us;
        self
    }

    /// Give the lines and the delay back.
    pub fn release(self) -> (SDA, SCL, D) {
        (self.sda, self.scl, self.delay)
    }

    fn half_period(&mut self) {
        self.delay.delay_ns(self.half_period_ns);
    }

    /// Release the clock and wait until it actually reads high.
    fn release_scl(&mut self) -> Result<(), BitBangError<E>> {
        self.scl.set_high()?;
        let mut waited = 0;
        while self.scl.is_low()? {
            if waited >= self.stretch_limit_us {
                return Err(BitBangError::ClockStretchTimeout);
            }
            self.delay.delay_us(1);
            waited += 1;
        }
        Ok(())
    }

    fn write_bit(&mut self, bit: bool) -> Result<(), BitBangError<E>> {
        self.sda.set_state(PinState::from(bit))?;
        self.half_period();
        self.release_scl()?;
        self.half_period();
        self.scl.set_low()?;
        Ok(())
    }

    fn read_bit(&mut self) -> Result<bool, BitBangError<E>> {
        self.sda.set_high()?;
        self.half_period();
        self.release_scl()?;
        self.half_period();
        let bit = self.sda.is_high()?;
        self.scl.set_low()?;
        Ok(bit)
    }
}

impl<SDA, SCL, D, E> TwoWireBus for BitBangBus<SDA, SCL, D>
where
    SDA: InputPin<Error = E> + OutputPin<Error = E>,
    SCL: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayNs,
    E: core::fmt::Debug,
{
    type Error = BitBangError<E>;

    fn start(&mut self) -> Result<(), Self::Error> {
        // also valid as a repeated start, SCL is low between bytes
        self.sda.set_high()?;
        self.half_period();
        self.release_scl()?;
        self.half_period();
        self.sda.set_low()?;
        self.half_period();
        self.scl.set_low()?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.sda.set_low()?;
        self.half_period();
        self.release_scl()?;
        self.half_period();
        self.sda.set_high()?;
        self.half_period();
        Ok(())
    }

    fn send_data(&mut self, byte: u8) -> Result<bool, Self::Error> {
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1 == 1)?;
        }
        // the device pulls SDA low to acknowledge
        Ok(!self.read_bit()?)
    }

    fn read_data(&mut self, ack: bool) -> Result<u8, Self::Error> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        self.write_bit(!ack)?;
        Ok(byte)
    }
}

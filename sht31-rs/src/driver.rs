use crate::{
    AcquisitionRate, Command, Error, Phase, Repeatability, SensorState, SlaveAddress,
    StatusRegister, TwoWireBus, crc,
};

/// Represents the SHT3x sensor on a two-wire bus.
///
/// The driver owns the bus for its lifetime and performs no internal locking; callers
/// that share it between threads must serialize access to the whole instance.
pub struct Sht31<B> {
    pub(crate) bus: B,
    pub(crate) address: u8,
    pub(crate) state: SensorState,
}

#[derive(Debug, Default)]
/// Builder for a SHT3x sensor.
pub struct Sht31Builder {
    pub(crate) address: SlaveAddress,
}

impl Sht31Builder {
    /// Set the address of the SHT3x sensor.
    pub fn with_address(mut self, address: SlaveAddress) -> Self {
        self.address = address;
        self
    }

    /// Build the SHT3x sensor on the given bus. No bus traffic is generated.
    pub fn build<B: TwoWireBus>(self, bus: B) -> Sht31<B> {
        Sht31 {
            bus,
            address: self.address.value(),
            state: SensorState::default(),
        }
    }
}

impl<B: TwoWireBus> Sht31<B> {
    /// Create a driver for a sensor at the default address (0x44).
    pub fn new(bus: B) -> Self {
        Sht31Builder::default().build(bus)
    }

    /// Get the address of the device.
    pub fn get_address(&self) -> u8 {
        self.address
    }

    /// Latest validated values.
    pub fn state(&self) -> SensorState {
        self.state
    }

    /// Raw temperature code of the last successful measurement.
    pub fn temperature(&self) -> u16 {
        self.state.temperature()
    }

    /// Raw humidity code of the last successful measurement.
    pub fn humidity(&self) -> u16 {
        self.state.humidity()
    }

    /// Raw status register of the last successful status read.
    pub fn status_register(&self) -> u16 {
        self.state.status_register()
    }

    /// Decoded status register of the last successful status read.
    pub fn status(&self) -> StatusRegister {
        self.state.status()
    }

    /// Give the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    /// Perform a soft reset of the sensor.
    pub fn soft_reset(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(Command::SoftReset)
    }

    /// Start periodic acquisition at the given repeatability and rate.
    pub fn set_periodic_mode(
        &mut self,
        repeatability: Repeatability,
        rate: AcquisitionRate,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(Command::SetPeriodicMode(repeatability, rate))
    }

    /// Start periodic acquisition from raw codes.
    ///
    /// # Parameters:
    /// - `repeatability`: 0 = low, 1 = medium, 2 = high.
    /// - `rate`: 0 = 0.5, 1 = 1, 2 = 2, 3 = 4, 4 = 10 measurements per second.
    ///
    /// Out of range codes return [`Error::InvalidParameter`] without touching the bus.
    pub fn set_periodic_mode_raw(
        &mut self,
        repeatability: u8,
        rate: u8,
    ) -> Result<(), Error<B::Error>> {
        let repeatability =
            Repeatability::try_from(repeatability).map_err(|_| Error::InvalidParameter)?;
        let rate = AcquisitionRate::try_from(rate).map_err(|_| Error::InvalidParameter)?;
        self.set_periodic_mode(repeatability, rate)
    }

    /// Start periodic acquisition with accelerated response time (4 Hz).
    pub fn start_art(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(Command::Art)
    }

    /// Fetch the latest periodic measurement. Temperature and humidity are only updated
    /// when both words pass their checksum.
    pub fn fetch_periodic_data(&mut self) -> Result<(), Error<B::Error>> {
        let words = self.read_command(Command::FetchPeriodicData, false)?;
        self.state.commit_measurement(words);
        Ok(())
    }

    /// Trigger a high repeatability measurement and read it back, stretching the clock
    /// while the conversion runs.
    pub fn get_single_shot_data(&mut self) -> Result<(), Error<B::Error>> {
        self.single_shot(Repeatability::High)
    }

    /// Trigger a measurement at the given repeatability and read it back.
    pub fn single_shot(&mut self, repeatability: Repeatability) -> Result<(), Error<B::Error>> {
        let words = self.read_command(Command::SingleShot(repeatability), true)?;
        self.state.commit_measurement(words);
        Ok(())
    }

    /// Read the status register.
    pub fn read_status_register(&mut self) -> Result<(), Error<B::Error>> {
        let words = self.read_command(Command::ReadStatusRegister, false)?;
        self.state.commit_status(words);
        Ok(())
    }

    /// Clear the alert flags of the status register.
    pub fn clear_status_register(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(Command::ClearStatusRegister)
    }

    /// Stop periodic acquisition.
    pub fn break_command(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(Command::Break)
    }

    /// Set the heater state of the sensor.
    pub fn set_heater(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        if enable {
            self.write_command(Command::HeaterEnable)
        } else {
            self.write_command(Command::HeaterDisable)
        }
    }

    fn write_command(&mut self, cmd: Command) -> Result<(), Error<B::Error>> {
        self.transaction(cmd, |dev| dev.send_command(cmd))
    }

    /// Send `cmd`, then read `K` checksummed words. With `stop_before_read` the write
    /// phase is closed before the read phase starts.
    fn read_command<const K: usize>(
        &mut self,
        cmd: Command,
        stop_before_read: bool,
    ) -> Result<[u16; K], Error<B::Error>> {
        debug_assert_eq!(K, cmd.response_words());
        self.transaction(cmd, |dev| {
            dev.send_command(cmd)?;
            if stop_before_read {
                dev.bus.stop()?;
            }
            dev.bus.start()?;
            acked(dev.bus.send_address_read(dev.address)?, Phase::AddressRead)?;
            dev.read_words()
        })
    }

    /// Bracket `f` with a start and exactly one closing stop, whatever the outcome.
    fn transaction<T>(
        &mut self,
        cmd: Command,
        f: impl FnOnce(&mut Self) -> Result<T, Error<B::Error>>,
    ) -> Result<T, Error<B::Error>> {
        log::trace!("[SHT] 0x{:02x}: {cmd:?}", self.address);
        let res = match self.bus.start() {
            Ok(()) => f(self),
            Err(e) => Err(Error::Bus(e)),
        };
        let stop = self.bus.stop();
        match (res, stop) {
            (Ok(v), Ok(())) => Ok(v),
            (Ok(_), Err(e)) => {
                log::debug!("[SHT] 0x{:02x}: {cmd:?} failed on stop: {e:?}", self.address);
                Err(Error::Bus(e))
            }
            (Err(e), _) => {
                log::debug!("[SHT] 0x{:02x}: {cmd:?} aborted: {e:?}", self.address);
                Err(e)
            }
        }
    }

    fn send_command(&mut self, cmd: Command) -> Result<(), Error<B::Error>> {
        acked(self.bus.send_address_write(self.address)?, Phase::AddressWrite)?;
        let [msb, lsb] = cmd.to_bytes();
        acked(self.bus.send_data(msb)?, Phase::CommandMsb)?;
        acked(self.bus.send_data(lsb)?, Phase::CommandLsb)
    }

    /// Read `K` words, always clocking in every byte so the last one can be NACKed
    /// before the stop. The first checksum mismatch is reported.
    fn read_words<const K: usize>(&mut self) -> Result<[u16; K], Error<B::Error>> {
        let mut words = [0u16; K];
        let mut mismatch = None;
        for (index, word) in words.iter_mut().enumerate() {
            let msb = self.bus.read_data(true)?;
            let lsb = self.bus.read_data(true)?;
            // the last byte of the whole read is not acknowledged
            let received = self.bus.read_data(index + 1 < K)?;
            let value = u16::from_be_bytes([msb, lsb]);
            if mismatch.is_none() && !crc::verify(value, received) {
                mismatch = Some(Error::Checksum {
                    index,
                    expected: crc::checksum(value),
                    received,
                });
            }
            *word = value;
        }
        match mismatch {
            Some(e) => Err(e),
            None => Ok(words),
        }
    }
}

#[inline]
fn acked<E>(ack: bool, phase: Phase) -> Result<(), Error<E>> {
    if ack { Ok(()) } else { Err(Error::Nack(phase)) }
}

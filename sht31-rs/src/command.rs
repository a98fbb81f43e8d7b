/// MSB of the periodic acquisition command, indexed by [`AcquisitionRate`].
const PERIODIC_MODE_MSB: [u8; 5] = [0x20, 0x21, 0x22, 0x23, 0x27];

/// LSB of the periodic acquisition command, indexed by [`AcquisitionRate`] then [`Repeatability`].
const PERIODIC_MODE_LSB: [[u8; 3]; 5] = [
    [0x2f, 0x24, 0x32],
    [0x2d, 0x26, 0x30],
    [0x2b, 0x20, 0x36],
    [0x29, 0x22, 0x34],
    [0x2a, 0x21, 0x37],
];

/// LSB of the clock-stretching single-shot command (MSB 0x2C), indexed by [`Repeatability`].
const SINGLE_SHOT_LSB: [u8; 3] = [0x10, 0x0d, 0x06];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Commands understood by the SHT3x sensor.
pub enum Command {
    /// Reset the sensor without cycling power.
    SoftReset,
    /// Start periodic acquisition.
    SetPeriodicMode(Repeatability, AcquisitionRate),
    /// Fetch the latest periodic measurement.
    FetchPeriodicData,
    /// Trigger a single measurement, stretching the clock until it is ready.
    SingleShot(Repeatability),
    /// Read the status register.
    ReadStatusRegister,
    /// Clear the alert flags of the status register.
    ClearStatusRegister,
    /// Stop periodic acquisition and return to single-shot mode.
    Break,
    /// Turn the internal heater on.
    HeaterEnable,
    /// Turn the internal heater off.
    HeaterDisable,
    /// Start periodic acquisition with accelerated response time (4 Hz).
    Art,
}

impl Command {
    /// Number of checksummed words the sensor returns for this command.
    pub const fn response_words(&self) -> usize {
        match self {
            Command::FetchPeriodicData | Command::SingleShot(_) => 2,
            Command::ReadStatusRegister => 1,
            _ => 0,
        }
    }

    /// The 16-bit command code.
    pub const fn code(&self) -> u16 {
        u16::from_be_bytes(self.to_bytes())
    }

    /// The command as transmitted, MSB first.
    pub const fn to_bytes(&self) -> [u8; 2] {
        match self {
            Command::SoftReset => [0x30, 0xa2],
            Command::SetPeriodicMode(repeatability, rate) => [
                PERIODIC_MODE_MSB[*rate as usize],
                PERIODIC_MODE_LSB[*rate as usize][*repeatability as usize],
            ],
            Command::FetchPeriodicData => [0xe0, 0x00],
            Command::SingleShot(repeatability) => [0x2c, SINGLE_SHOT_LSB[*repeatability as usize]],
            Command::ReadStatusRegister => [0xf3, 0x2d],
            Command::ClearStatusRegister => [0x30, 0x41],
            Command::Break => [0x30, 0x93],
            Command::HeaterEnable => [0x30, 0x6d],
            Command::HeaterDisable => [0x30, 0x66],
            Command::Art => [0x2b, 0x32],
        }
    }
}

impl From<Command> for [u8; 2] {
    fn from(val: Command) -> Self {
        val.to_bytes()
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Measurement repeatability. Higher repeatability trades power and conversion time for precision.
pub enum Repeatability {
    /// Low repeatability, with a conversion time of at most 4.5 milliseconds.
    Low = 0,
    /// Medium repeatability, with a conversion time of at most 6.5 milliseconds.
    Medium = 1,
    #[default]
    /// High repeatability, with a conversion time of at most 15.5 milliseconds.
    High = 2,
}

impl Repeatability {
    /// Returns the maximum conversion time in microseconds.
    pub fn delay_time(self) -> u32 {
        match self {
            Repeatability::Low => 4500,
            Repeatability::Medium => 6500,
            Repeatability::High => 15500,
        }
    }
}

impl TryFrom<u8> for Repeatability {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Repeatability::*;
        match value {
            0 => Ok(Low),
            1 => Ok(Medium),
            2 => Ok(High),
            _ => Err("Invalid repeatability"),
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Periodic acquisition rate, in measurements per second.
pub enum AcquisitionRate {
    /// One measurement every two seconds.
    HalfHz = 0,
    #[default]
    /// One measurement per second.
    OneHz = 1,
    /// Two measurements per second.
    TwoHz = 2,
    /// Four measurements per second.
    FourHz = 3,
    /// Ten measurements per second.
    TenHz = 4,
}

impl AcquisitionRate {
    /// Returns the interval between two measurements in milliseconds.
    pub fn period_ms(self) -> u32 {
        match self {
            AcquisitionRate::HalfHz => 2000,
            AcquisitionRate::OneHz => 1000,
            AcquisitionRate::TwoHz => 500,
            AcquisitionRate::FourHz => 250,
            AcquisitionRate::TenHz => 100,
        }
    }
}

impl TryFrom<u8> for AcquisitionRate {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use AcquisitionRate::*;
        match value {
            0 => Ok(HalfHz),
            1 => Ok(OneHz),
            2 => Ok(TwoHz),
            3 => Ok(FourHz),
            4 => Ok(TenHz),
            _ => Err("Invalid acquisition rate"),
        }
    }
}

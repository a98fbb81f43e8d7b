use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use clap::{Parser, ValueEnum};
use gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::{CdevPin, Delay};
use sht31::{
    AcquisitionRate, BitBangBus, Repeatability, Sht31, Sht31Builder, SlaveAddress, TwoWireBus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Trigger one measurement per interval
    Single,
    /// Let the sensor sample on its own and fetch the latest result
    Periodic,
}

/// Read raw temperature and humidity codes from a SHT3x sensor on bit-banged GPIO lines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the GPIO character device (e.g., /dev/gpiochip0)
    #[arg(short, long, default_value = "/dev/gpiochip0")]
    chip: PathBuf,
    /// Line offset of the data line
    #[arg(long)]
    sda: u32,
    /// Line offset of the clock line
    #[arg(long)]
    scl: u32,
    /// The ADDR pin is tied high (address 0x45)
    #[arg(long, default_value_t = false)]
    addr_high: bool,
    /// Bus frequency in Hz
    #[arg(long, default_value_t = 100_000)]
    frequency: u32,
    /// Acquisition mode
    #[arg(short, long, value_enum, default_value_t = Mode::Single)]
    mode: Mode,
    /// Repeatability: 0 = low, 1 = medium, 2 = high
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..3))]
    repeatability: u8,
    /// Periodic rate: 0 = 0.5, 1 = 1, 2 = 2, 3 = 4, 4 = 10 measurements per second
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..5))]
    rate: u8,
    /// Interval between reads in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    interval: u64,
}

fn main() {
    // Initialize the logger
    env_logger::init();
    // Parse command line arguments
    let args = Args::parse();
    log::info!("Arguments: {args:#?}");
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || {
            log::info!("Received Ctrl+C, stopping...");
            running.store(false, Ordering::Relaxed);
        })
        .expect("Error setting Ctrl-C handler");
    }
    let bus = open_bus(&args);
    let sht = Sht31Builder::default()
        .with_address(SlaveAddress::default().with_addr(args.addr_high))
        .build(bus);
    run(sht, &args, &running);
}

fn open_bus(args: &Args) -> BitBangBus<CdevPin, CdevPin, Delay> {
    println!("[HUM] Opening GPIO chip: {}", args.chip.display());
    let mut chip = Chip::new(&args.chip).expect("Failed to open GPIO chip");
    let mut request = |offset: u32, name: &str| {
        let handle = chip
            .get_line(offset)
            .and_then(|line| {
                line.request(
                    LineRequestFlags::OUTPUT | LineRequestFlags::OPEN_DRAIN,
                    1,
                    "humi-tester",
                )
            })
            .unwrap_or_else(|e| panic!("[HUM] Could not request {name} line {offset}: {e}"));
        CdevPin::new(handle)
            .unwrap_or_else(|e| panic!("[HUM] Could not configure {name} line {offset}: {e}"))
    };
    let sda = request(args.sda, "SDA");
    let scl = request(args.scl, "SCL");
    BitBangBus::new(sda, scl, Delay).with_frequency(args.frequency)
}

fn run<B: TwoWireBus>(mut sht: Sht31<B>, args: &Args, running: &AtomicBool) {
    let repeatability =
        Repeatability::try_from(args.repeatability).expect("Repeatability validated by clap");
    let rate = AcquisitionRate::try_from(args.rate).expect("Rate validated by clap");

    if let Err(e) = sht.soft_reset() {
        log::error!(
            "[HUM] Sensor 0x{:02x}: Could not reset: {e:?}",
            sht.get_address()
        );
        return;
    }
    println!("[HUM] Device found at address {:02x}", sht.get_address());
    // soft reset takes at most 1.5 ms
    thread::sleep(Duration::from_millis(2));

    match sht.read_status_register() {
        Ok(()) => log::info!(
            "[HUM] Sensor 0x{:02x}: Status {:?}",
            sht.get_address(),
            sht.status()
        ),
        Err(e) => log::warn!(
            "[HUM] Sensor 0x{:02x}: Could not read status: {e:?}",
            sht.get_address()
        ),
    }
    if let Err(e) = sht.clear_status_register() {
        log::warn!(
            "[HUM] Sensor 0x{:02x}: Could not clear status: {e:?}",
            sht.get_address()
        );
    }

    if args.mode == Mode::Periodic {
        if let Err(e) = sht.set_periodic_mode(repeatability, rate) {
            log::error!(
                "[HUM] Sensor 0x{:02x}: Could not start periodic mode: {e:?}",
                sht.get_address()
            );
            return;
        }
        thread::sleep(Duration::from_millis(rate.period_ms() as u64));
    }

    let interval = Duration::from_millis(args.interval);
    while running.load(Ordering::Relaxed) {
        let start = Instant::now();
        let res = match args.mode {
            Mode::Single => sht.single_shot(repeatability),
            Mode::Periodic => sht.fetch_periodic_data(),
        };
        match res {
            Ok(()) => log::info!(
                "[HUM] Sensor 0x{:02x}: T = 0x{:04x}, RH = 0x{:04x} in {:.2} ms.",
                sht.get_address(),
                sht.temperature(),
                sht.humidity(),
                start.elapsed().as_secs_f64() * 1000.0
            ),
            Err(e) => log::warn!(
                "[HUM] Sensor 0x{:02x}: Error reading: {e:?}",
                sht.get_address()
            ),
        }
        if let Some(rest) = interval.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }
    }

    if args.mode == Mode::Periodic {
        if let Err(e) = sht.break_command() {
            log::warn!(
                "[HUM] Sensor 0x{:02x}: Could not stop periodic mode: {e:?}",
                sht.get_address()
            );
        }
    }
    log::info!("[HUM] Exiting.");
}

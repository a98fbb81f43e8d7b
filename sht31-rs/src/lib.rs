#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
//!# SHT31 - Driver for the Sensirion SHT3x Humidity and Temperature Sensors
//! This crate implements the command/response protocol of the SHT3x family on top of a
//! byte-level two-wire bus. Every received word is validated against the device CRC-8
//! before it is stored, and the raw 16-bit device codes are exposed to the caller.
//!
//! The bus is abstracted by the [`TwoWireBus`] trait. A bit-banged implementation over
//! [`embedded_hal`] digital pins is provided as [`BitBangBus`].
mod address;
mod bitbang;
mod bus;
mod command;
mod crc;
mod driver;
mod error;
mod register;
mod state;

#[cfg(test)]
mod mock;

pub use address::SlaveAddress;
pub use bitbang::{BitBangBus, BitBangError};
pub use bus::TwoWireBus;
pub use command::{AcquisitionRate, Command, Repeatability};
pub use crc::{checksum, verify};
pub use driver::{Sht31, Sht31Builder};
pub use error::{Error, Phase};
pub use register::StatusRegister;
pub use state::SensorState;

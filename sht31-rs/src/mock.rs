//! Scripted [`TwoWireBus`] used by the unit tests.
//!
//! Every primitive pops the next expectation and asserts that it matches the call that
//! was made, in the manner of `embedded-hal-mock`.
use std::collections::VecDeque;

use crate::TwoWireBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transaction {
    Start,
    Stop,
    AddressWrite { address: u8, ack: bool },
    AddressRead { address: u8, ack: bool },
    Send { byte: u8, ack: bool },
    Read { ack: bool, byte: u8 },
    /// The next primitive, whatever it is, fails with [`MockFault`].
    Fault,
}

impl Transaction {
    pub fn start() -> Self {
        Transaction::Start
    }

    pub fn stop() -> Self {
        Transaction::Stop
    }

    pub fn address_write(address: u8, ack: bool) -> Self {
        Transaction::AddressWrite { address, ack }
    }

    pub fn address_read(address: u8, ack: bool) -> Self {
        Transaction::AddressRead { address, ack }
    }

    pub fn send(byte: u8, ack: bool) -> Self {
        Transaction::Send { byte, ack }
    }

    pub fn read(ack: bool, byte: u8) -> Self {
        Transaction::Read { ack, byte }
    }
}

#[derive(Debug)]
pub(crate) struct MockBus {
    expected: VecDeque<Transaction>,
}

impl MockBus {
    pub fn new(expectations: &[Transaction]) -> Self {
        Self {
            expected: expectations.iter().copied().collect(),
        }
    }

    /// Assert that every expectation was consumed.
    pub fn done(&mut self) {
        assert!(
            self.expected.is_empty(),
            "unconsumed expectations: {:?}",
            self.expected
        );
    }

    fn next(&mut self, call: &str) -> Transaction {
        self.expected
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call: {call}"))
    }
}

impl TwoWireBus for MockBus {
    type Error = MockFault;

    fn start(&mut self) -> Result<(), Self::Error> {
        match self.next("start") {
            Transaction::Start => Ok(()),
            Transaction::Fault => Err(MockFault),
            other => panic!("expected {other:?}, got start"),
        }
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        match self.next("stop") {
            Transaction::Stop => Ok(()),
            Transaction::Fault => Err(MockFault),
            other => panic!("expected {other:?}, got stop"),
        }
    }

    fn send_data(&mut self, byte: u8) -> Result<bool, Self::Error> {
        match self.next("send_data") {
            Transaction::Send { byte: b, ack } => {
                assert_eq!(b, byte, "sent byte");
                Ok(ack)
            }
            Transaction::Fault => Err(MockFault),
            other => panic!("expected {other:?}, got send_data(0x{byte:02x})"),
        }
    }

    fn read_data(&mut self, ack: bool) -> Result<u8, Self::Error> {
        match self.next("read_data") {
            Transaction::Read { ack: a, byte } => {
                assert_eq!(a, ack, "ack sent for read byte");
                Ok(byte)
            }
            Transaction::Fault => Err(MockFault),
            other => panic!("expected {other:?}, got read_data({ack})"),
        }
    }

    fn send_address_write(&mut self, address: u8) -> Result<bool, Self::Error> {
        match self.next("send_address_write") {
            Transaction::AddressWrite { address: a, ack } => {
                assert_eq!(a, address, "write address");
                Ok(ack)
            }
            Transaction::Fault => Err(MockFault),
            other => panic!("expected {other:?}, got send_address_write(0x{address:02x})"),
        }
    }

    fn send_address_read(&mut self, address: u8) -> Result<bool, Self::Error> {
        match self.next("send_address_read") {
            Transaction::AddressRead { address: a, ack } => {
                assert_eq!(a, address, "read address");
                Ok(ack)
            }
            Transaction::Fault => Err(MockFault),
            other => panic!("expected {other:?}, got send_address_read(0x{address:02x})"),
        }
    }
}

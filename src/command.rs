//! The register set and frame protocol for a chain of cascaded devices.
//!
//! Note 1: N cascaded devices wired DOUT-to-DIN form one long shift register
//! behind a single shared chip-select line. A transfer therefore carries
//! exactly one register/value pair per device, 2N bytes total, and every
//! device latches the last 16 bits it saw when chip-select deasserts. The
//! pair intended for the LAST device of the chain is clocked out first;
//! earlier bits ripple down the chain into the nearer devices.

use crate::error::Error;
use crate::interface::ChainInterface;

pub mod consts {
    //! Fixed dimensions of a device chain.

    /// Most devices a single chain supports.
    pub const MAX_DEVICES: usize = 8;
    /// Addressable digit rows per device.
    pub const NUM_DIGITS: u8 = 8;
    /// Bytes in a frame addressing a maximum-length chain.
    pub const FRAME_CAPACITY: usize = 2 * MAX_DEVICES;
}

use self::consts::*;

/// The addressable registers of one device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Skipped position in a frame; the device at that position is left
    /// unchanged.
    NoOp = 0x00,
    Digit0 = 0x01,
    Digit1 = 0x02,
    Digit2 = 0x03,
    Digit3 = 0x04,
    Digit4 = 0x05,
    Digit5 = 0x06,
    Digit6 = 0x07,
    Digit7 = 0x08,
    /// BCD decode enable mask. A dot matrix runs with decode off.
    DecodeMode = 0x09,
    /// PWM brightness, lower nibble.
    Intensity = 0x0A,
    /// Number of digit rows scanned, minus one.
    ScanLimit = 0x0B,
    /// 0 puts the device in shutdown, 1 in normal operation.
    Shutdown = 0x0C,
    /// 1 lights every segment regardless of digit RAM contents.
    DisplayTest = 0x0F,
}

impl Register {
    /// The digit register for a 1-based digit row.
    pub fn digit(digit: u8) -> Result<Register, Error> {
        match digit {
            1 => Ok(Register::Digit0),
            2 => Ok(Register::Digit1),
            3 => Ok(Register::Digit2),
            4 => Ok(Register::Digit3),
            5 => Ok(Register::Digit4),
            6 => Ok(Register::Digit5),
            7 => Ok(Register::Digit6),
            8 => Ok(Register::Digit7),
            _ => Err(Error::InvalidArgument),
        }
    }

    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// One chip-select-bracketed transfer: a register/value pair for every
/// device in a chain. Construction validates all indices, so a frame that
/// exists is always safe to put on the wire.
pub struct Frame {
    buf: [u8; FRAME_CAPACITY],
    len: usize,
}

impl Frame {
    /// A frame carrying `register`/`value` to one device and no-op pairs to
    /// every other position. `device` is 1-based; device 1 sits nearest the
    /// bus master, so its pair goes out last (Note 1) at byte offset
    /// `2 * (num_devices - device)`.
    pub fn targeted(
        num_devices: u8,
        device: u8,
        register: Register,
        value: u8,
    ) -> Result<Frame, Error> {
        if device == 0 || device > num_devices {
            return Err(Error::InvalidArgument);
        }
        let mut frame = Frame::no_ops(num_devices)?;
        let offset = 2 * (num_devices - device) as usize;
        frame.buf[offset] = register.addr();
        frame.buf[offset + 1] = value;
        Ok(frame)
    }

    /// A frame carrying the same `register`/`value` pair to every device.
    pub fn broadcast(num_devices: u8, register: Register, value: u8) -> Result<Frame, Error> {
        let mut frame = Frame::no_ops(num_devices)?;
        for pair in frame.buf[..frame.len].chunks_mut(2) {
            pair[0] = register.addr();
            pair[1] = value;
        }
        Ok(frame)
    }

    fn no_ops(num_devices: u8) -> Result<Frame, Error> {
        if num_devices == 0 || num_devices as usize > MAX_DEVICES {
            return Err(Error::InvalidArgument);
        }
        Ok(Frame {
            buf: [0x00; FRAME_CAPACITY],
            len: 2 * num_devices as usize,
        })
    }

    /// The wire bytes, pair for the far end of the chain first.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Transmit the frame. Chip-select is deasserted even when the transfer
    /// fails: a line left asserted keeps the chain latching whatever bits
    /// happen to sit in the shift registers.
    pub fn send<DI>(&self, iface: &mut DI) -> Result<(), Error>
    where
        DI: ChainInterface,
    {
        iface.chip_select(true);
        let res = iface.write(self.bytes());
        iface.chip_select(false);
        res.map_err(|_| Error::BusFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Event, TestSpyInterface};

    #[test]
    fn digit_registers() {
        assert_eq!(Register::digit(1), Ok(Register::Digit0));
        assert_eq!(Register::digit(8), Ok(Register::Digit7));
        assert_eq!(Register::digit(1).unwrap().addr(), 0x01);
        assert_eq!(Register::digit(8).unwrap().addr(), 0x08);
        assert_eq!(Register::digit(0), Err(Error::InvalidArgument));
        assert_eq!(Register::digit(9), Err(Error::InvalidArgument));
    }

    #[test]
    fn targeted_frame_layout() {
        for n in 1..=8u8 {
            for device in 1..=n {
                let frame = Frame::targeted(n, device, Register::Intensity, 0x0b).unwrap();
                let bytes = frame.bytes();
                assert_eq!(bytes.len(), 2 * n as usize);
                let offset = 2 * (n - device) as usize;
                for (i, &b) in bytes.iter().enumerate() {
                    if i == offset {
                        assert_eq!(b, 0x0a);
                    } else if i == offset + 1 {
                        assert_eq!(b, 0x0b);
                    } else {
                        assert_eq!(b, 0x00, "no-op pair expected at byte {}", i);
                    }
                }
            }
        }
    }

    #[test]
    fn targeted_frame_rejects_bad_indices() {
        let invalid = |r: Result<Frame, Error>| assert_eq!(
            r.err(),
            Some(Error::InvalidArgument)
        );
        invalid(Frame::targeted(4, 0, Register::Shutdown, 1));
        invalid(Frame::targeted(4, 5, Register::Shutdown, 1));
        invalid(Frame::targeted(0, 1, Register::Shutdown, 1));
        invalid(Frame::targeted(9, 1, Register::Shutdown, 1));
    }

    #[test]
    fn broadcast_frame_layout() {
        for n in 1..=8u8 {
            let frame = Frame::broadcast(n, Register::ScanLimit, 0x07).unwrap();
            let bytes = frame.bytes();
            assert_eq!(bytes.len(), 2 * n as usize);
            for pair in bytes.chunks(2) {
                assert_eq!(pair, [0x0b, 0x07]);
            }
        }
    }

    #[test]
    fn send_brackets_chip_select() {
        let mut di = TestSpyInterface::new();
        Frame::targeted(2, 1, Register::Digit0, 0x3c)
            .unwrap()
            .send(&mut di)
            .unwrap();
        assert_eq!(
            di.events(),
            &[
                Event::Select,
                Event::Write(vec![0x00, 0x00, 0x01, 0x3c]),
                Event::Deselect,
            ]
        );
    }

    #[test]
    fn send_deasserts_after_a_failed_write() {
        let mut di = TestSpyInterface::new();
        di.fail_writes();
        let res = Frame::broadcast(2, Register::Shutdown, 1).unwrap().send(&mut di);
        assert_eq!(res, Err(Error::BusFailure));
        assert_eq!(di.events().last(), Some(&Event::Deselect));
    }
}

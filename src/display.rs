//! The driver core. Owns the initialization state machine and the public
//! display operations, and runs the column-shift scroll across the chain.

use crate::command::consts::{MAX_DEVICES, NUM_DIGITS};
use crate::command::{Frame, Register};
use crate::config::Config;
use crate::error::Error;
use crate::font;
use crate::interface::ChainInterface;

/// Settle time after each configuration register broadcast.
const CONFIG_SETTLE_US: u32 = 1;
/// Hold time between the phases of the power-on self-test.
const TEST_HOLD_US: u32 = 100;
/// Time each scrolled column stays on the display.
const SCROLL_STEP_US: u32 = 100_000;

/// Lit columns of the whole chain during a scroll, one byte per device per
/// digit row. Slot 0 of a row belongs to the FAR device (device N), slot
/// `num_devices - 1` to device 1 nearest the bus master.
type Canvas = [[u8; MAX_DEVICES]; NUM_DIGITS as usize];

/// Driver lifecycle. `Ready` is required by every public operation; a
/// failed `init` parks the driver in `Faulted` until `init` runs again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Uninitialized,
    Ready,
    Faulted,
}

/// The driver for one chain of cascaded devices.
pub struct Display<DI>
where
    DI: ChainInterface,
{
    iface: DI,
    config: Config,
    state: State,
}

impl<DI> Display<DI>
where
    DI: ChainInterface,
{
    /// Construct a driver for the chain behind `iface`. No hardware access
    /// happens until `init`.
    pub fn new(iface: DI, config: Config) -> Self {
        Display {
            iface,
            config,
            state: State::Uninitialized,
        }
    }

    /// The configuration this driver was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bring up every device in the chain and leave the display blank.
    ///
    /// Broadcasts the decode-mode, intensity and scan-limit registers,
    /// takes the devices out of shutdown, then runs the display test on and
    /// off and blanks every digit. The test-and-blank pass is mandatory:
    /// digit RAM contents are undefined at cold boot, and skipping it
    /// leaves random pixels lit.
    ///
    /// On any failure the driver transitions to a faulted state in which
    /// every operation reports `NotInitialized`. Only another `init` call
    /// leaves that state.
    pub fn init(&mut self) -> Result<(), Error> {
        info!("initializing chain of {} devices", self.config.num_devices);
        self.state = State::Uninitialized;
        match self.bring_up() {
            Ok(()) => {
                self.state = State::Ready;
                info!("chain ready");
                Ok(())
            }
            Err(e) => {
                error!("chain bring-up failed: {}", e);
                self.state = State::Faulted;
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), Error> {
        self.config.validate()?;
        let n = self.config.num_devices;
        for &(register, value) in &[
            (Register::DecodeMode, self.config.decode_mode),
            (Register::Intensity, self.config.intensity),
            (Register::ScanLimit, self.config.scan_limit - 1),
        ] {
            Frame::broadcast(n, register, value)?.send(&mut self.iface)?;
            self.iface.delay_us(CONFIG_SETTLE_US);
        }
        Frame::broadcast(n, Register::Shutdown, 1)?.send(&mut self.iface)?;
        Frame::broadcast(n, Register::DisplayTest, 1)?.send(&mut self.iface)?;
        self.iface.delay_us(TEST_HOLD_US);
        Frame::broadcast(n, Register::DisplayTest, 0)?.send(&mut self.iface)?;
        self.iface.delay_us(TEST_HOLD_US);
        self.fill_all(0x00)?;
        self.iface.delay_us(TEST_HOLD_US);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), Error> {
        match self.state {
            State::Ready => Ok(()),
            _ => Err(Error::NotInitialized),
        }
    }

    fn check_device(&self, device: u8) -> Result<(), Error> {
        if device == 0 || device > self.config.num_devices {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// Paint a character on a single device.
    ///
    /// All 8 digit rows are written; failures are collected and reported
    /// once after every row has been attempted.
    pub fn display_char_on_device(&mut self, character: u8, device: u8) -> Result<(), Error> {
        debug!("display {:#04x} on device {}", character, device);
        self.ensure_ready()?;
        self.check_device(device)?;
        let glyph = font::glyph(character);
        let failed = self.paint_device(device, &glyph).is_err();
        self.report(failed)
    }

    /// Paint the same character on every device in the chain.
    ///
    /// Each device is still addressed individually through the shared
    /// chain, so this issues N x 8 targeted frames rather than one
    /// broadcast per row. Failures are collected across all of them.
    pub fn display_char(&mut self, character: u8) -> Result<(), Error> {
        debug!("display {:#04x} on all devices", character);
        self.ensure_ready()?;
        let glyph = font::glyph(character);
        let mut failed = false;
        for device in 1..=self.config.num_devices {
            failed |= self.paint_device(device, &glyph).is_err();
        }
        self.report(failed)
    }

    /// Blank every digit of every device.
    pub fn clear_display(&mut self) -> Result<(), Error> {
        debug!("clear display");
        self.ensure_ready()?;
        let failed = self.fill_all(0x00).is_err();
        self.report(failed)
    }

    /// Light every pixel of every device.
    pub fn display_all_on(&mut self) -> Result<(), Error> {
        self.ensure_ready()?;
        let failed = self.fill_all(0xff).is_err();
        self.report(failed)
    }

    /// Scroll `text` across the full width of the chain, one pixel column
    /// at a time, then keep shifting until the last character has left the
    /// visible area. The text is interpreted in the font's code space
    /// (ASCII plus the 8-bit extensions in `font`), not UTF-8.
    ///
    /// Blocks for the whole marquee: every column step rewrites the entire
    /// canvas (one frame per device per digit row) and then holds it on the
    /// display for a fixed interval. Frame failures are collected and
    /// reported once at the end; the scroll always runs to completion.
    pub fn scroll_text(&mut self, text: &[u8]) -> Result<(), Error> {
        debug!("scroll {} characters", text.len());
        self.ensure_ready()?;
        let mut canvas: Canvas = [[0x00; MAX_DEVICES]; NUM_DIGITS as usize];
        let mut failed = false;
        for &code in text {
            let glyph = font::glyph(code);
            for column in (0..8u8).rev() {
                failed |= self
                    .shift_step(&mut canvas, |row| (glyph[row] >> column) & 1)
                    .is_err();
            }
        }
        // Shift in dark columns until every previously lit column has
        // crossed the whole chain and fallen off the far end.
        for _ in 0..self.config.num_devices as usize * 8 {
            failed |= self.shift_step(&mut canvas, |_| 0).is_err();
        }
        self.report(failed)
    }

    /// One column step of a scroll: shift every canvas row left one bit,
    /// carrying each slot's top bit into its left-hand neighbor, feed the
    /// incoming column bit in at the near end of the chain, then write the
    /// whole canvas out and hold it visible.
    fn shift_step<F>(&mut self, canvas: &mut Canvas, incoming: F) -> Result<(), Error>
    where
        F: Fn(usize) -> u8,
    {
        let n = self.config.num_devices as usize;
        for (row, bytes) in canvas.iter_mut().enumerate() {
            for slot in 0..n - 1 {
                bytes[slot] = bytes[slot] << 1 | bytes[slot + 1] >> 7;
            }
            bytes[n - 1] = bytes[n - 1] << 1 | incoming(row);
        }
        let mut failed = false;
        for row in 0..NUM_DIGITS {
            for device in 1..=self.config.num_devices {
                let value = canvas[row as usize][(self.config.num_devices - device) as usize];
                let frame = self.digit_frame(device, row + 1, value)?;
                failed |= frame.send(&mut self.iface).is_err();
            }
        }
        self.iface.delay_us(SCROLL_STEP_US);
        Self::status(failed)
    }

    /// Write `value` to one digit row of one device.
    pub fn write_digit(&mut self, device: u8, digit: u8, value: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        self.digit_frame(device, digit, value)?.send(&mut self.iface)
    }

    /// Blank one digit row of one device.
    pub fn clear_digit(&mut self, device: u8, digit: u8) -> Result<(), Error> {
        self.write_digit(device, digit, 0x00)
    }

    /// Light every pixel of one device.
    pub fn device_all_on(&mut self, device: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        self.check_device(device)?;
        self.fill_device(device, 0xff)
    }

    /// Blank every pixel of one device.
    pub fn device_all_off(&mut self, device: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        self.check_device(device)?;
        self.fill_device(device, 0x00)
    }

    /// Take one device out of shutdown.
    pub fn enable_device(&mut self, device: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        Frame::targeted(self.config.num_devices, device, Register::Shutdown, 1)?
            .send(&mut self.iface)
    }

    /// Put one device into shutdown. Its digit RAM is retained.
    pub fn disable_device(&mut self, device: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        Frame::targeted(self.config.num_devices, device, Register::Shutdown, 0)?
            .send(&mut self.iface)
    }

    /// Take the whole chain in or out of shutdown at once.
    pub fn power(&mut self, on: bool) -> Result<(), Error> {
        self.ensure_ready()?;
        Frame::broadcast(self.config.num_devices, Register::Shutdown, on as u8)?
            .send(&mut self.iface)
    }

    /// Force every segment of every device on (test mode), or return them
    /// to showing digit RAM.
    pub fn display_test(&mut self, on: bool) -> Result<(), Error> {
        self.ensure_ready()?;
        Frame::broadcast(self.config.num_devices, Register::DisplayTest, on as u8)?
            .send(&mut self.iface)
    }

    /// Re-send the configuration registers to a single device, with the
    /// same settle delays as the chain-wide pass in `init`.
    pub fn init_device(&mut self, device: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        self.check_device(device)?;
        let n = self.config.num_devices;
        for &(register, value) in &[
            (Register::DecodeMode, self.config.decode_mode),
            (Register::Intensity, self.config.intensity),
            (Register::ScanLimit, self.config.scan_limit - 1),
        ] {
            Frame::targeted(n, device, register, value)?.send(&mut self.iface)?;
            self.iface.delay_us(CONFIG_SETTLE_US);
        }
        Ok(())
    }

    /// Write a glyph's 8 rows to one device, attempting every row and
    /// OR-combining failures.
    fn paint_device(&mut self, device: u8, glyph: &font::Glyph) -> Result<(), Error> {
        let mut failed = false;
        for (row, &value) in glyph.iter().enumerate() {
            let frame = self.digit_frame(device, row as u8 + 1, value)?;
            failed |= frame.send(&mut self.iface).is_err();
        }
        Self::status(failed)
    }

    fn fill_all(&mut self, value: u8) -> Result<(), Error> {
        let mut failed = false;
        for device in 1..=self.config.num_devices {
            failed |= self.fill_device(device, value).is_err();
        }
        Self::status(failed)
    }

    fn fill_device(&mut self, device: u8, value: u8) -> Result<(), Error> {
        let mut failed = false;
        for digit in 1..=NUM_DIGITS {
            let frame = self.digit_frame(device, digit, value)?;
            failed |= frame.send(&mut self.iface).is_err();
        }
        Self::status(failed)
    }

    fn digit_frame(&self, device: u8, digit: u8, value: u8) -> Result<Frame, Error> {
        let register = Register::digit(digit)?;
        Frame::targeted(self.config.num_devices, device, register, value)
    }

    fn status(failed: bool) -> Result<(), Error> {
        if failed {
            Err(Error::BusFailure)
        } else {
            Ok(())
        }
    }

    /// Outcome of a multi-frame public operation, logged once.
    fn report(&self, failed: bool) -> Result<(), Error> {
        if failed {
            error!("one or more frame writes failed");
        }
        Self::status(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::TestSpyInterface;

    fn uninitialized(n: u8) -> Display<TestSpyInterface> {
        Display::new(TestSpyInterface::new(), Config::new(n))
    }

    fn ready(n: u8) -> Display<TestSpyInterface> {
        let mut disp = uninitialized(n);
        disp.init().unwrap();
        disp.iface.clear();
        disp
    }

    #[test]
    fn operations_require_init() {
        let mut disp = uninitialized(4);
        assert_eq!(disp.display_char(b'A'), Err(Error::NotInitialized));
        assert_eq!(disp.display_char_on_device(b'A', 1), Err(Error::NotInitialized));
        assert_eq!(disp.clear_display(), Err(Error::NotInitialized));
        assert_eq!(disp.scroll_text(b"A"), Err(Error::NotInitialized));
        assert_eq!(disp.write_digit(1, 1, 0xff), Err(Error::NotInitialized));
        assert_eq!(disp.power(true), Err(Error::NotInitialized));
        assert_eq!(disp.iface.events().len(), 0);
    }

    #[test]
    fn init_register_sequence() {
        let mut disp = uninitialized(2);
        disp.init().unwrap();
        let frames = disp.iface.frames();
        // Three config broadcasts, shutdown, test on/off, then 2 x 8
        // blanking digit frames.
        assert_eq!(frames.len(), 6 + 16);
        assert_eq!(frames[0], vec![0x09, 0x00, 0x09, 0x00]);
        assert_eq!(frames[1], vec![0x0a, 0x08, 0x0a, 0x08]);
        assert_eq!(frames[2], vec![0x0b, 0x07, 0x0b, 0x07]);
        assert_eq!(frames[3], vec![0x0c, 0x01, 0x0c, 0x01]);
        assert_eq!(frames[4], vec![0x0f, 0x01, 0x0f, 0x01]);
        assert_eq!(frames[5], vec![0x0f, 0x00, 0x0f, 0x00]);
        // Device 1 blanked first, digits 1-8, then device 2.
        assert_eq!(frames[6], vec![0x00, 0x00, 0x01, 0x00]);
        assert_eq!(frames[13], vec![0x00, 0x00, 0x08, 0x00]);
        assert_eq!(frames[14], vec![0x01, 0x00, 0x00, 0x00]);
        assert_eq!(frames[21], vec![0x08, 0x00, 0x00, 0x00]);
        assert_eq!(disp.iface.delays(), vec![1, 1, 1, 100, 100, 100]);
    }

    #[test]
    fn scan_limit_register_holds_digits_minus_one() {
        let mut disp = Display::new(TestSpyInterface::new(), Config::new(1).scan_limit(3));
        disp.init().unwrap();
        assert_eq!(disp.iface.frames()[2], vec![0x0b, 0x02]);
    }

    #[test]
    fn invalid_config_faults_without_bus_traffic() {
        let mut disp = Display::new(TestSpyInterface::new(), Config::new(4).intensity(16));
        assert_eq!(disp.init(), Err(Error::InvalidArgument));
        assert_eq!(disp.iface.events().len(), 0);
        assert_eq!(disp.clear_display(), Err(Error::NotInitialized));
    }

    #[test]
    fn failed_init_faults_until_reinit() {
        let mut disp = uninitialized(2);
        disp.iface.fail_writes();
        assert_eq!(disp.init(), Err(Error::BusFailure));
        disp.iface.clear();
        assert_eq!(disp.display_char(b'A'), Err(Error::NotInitialized));
        assert_eq!(disp.iface.events().len(), 0);
    }

    #[test]
    fn display_char_on_device_paints_eight_rows() {
        let mut disp = ready(2);
        disp.display_char_on_device(b'H', 2).unwrap();
        let frames = disp.iface.frames();
        assert_eq!(frames.len(), 8);
        let glyph = crate::font::glyph(b'H');
        for (row, frame) in frames.iter().enumerate() {
            // Device 2 of 2 owns the first pair; device 1 gets a no-op.
            assert_eq!(frame, &vec![row as u8 + 1, glyph[row], 0x00, 0x00]);
        }
    }

    #[test]
    fn display_char_on_device_validates_device() {
        let mut disp = ready(4);
        assert_eq!(
            disp.display_char_on_device(b'A', 0),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            disp.display_char_on_device(b'A', 5),
            Err(Error::InvalidArgument)
        );
        assert_eq!(disp.iface.events().len(), 0);
    }

    #[test]
    fn display_char_addresses_every_device_individually() {
        let mut disp = ready(4);
        disp.display_char(b'T').unwrap();
        let frames = disp.iface.frames();
        assert_eq!(frames.len(), 4 * 8);
        let glyph = crate::font::glyph(b'T');
        // First frame: device 1 of 4, digit 1: true pair in the last slot.
        assert_eq!(
            frames[0],
            vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, glyph[0]]
        );
        // Last frame: device 4, digit 8: true pair in the first slot.
        assert_eq!(
            frames[31],
            vec![0x08, glyph[7], 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn clear_display_blanks_all_digits() {
        let mut disp = ready(3);
        disp.clear_display().unwrap();
        let frames = disp.iface.frames();
        assert_eq!(frames.len(), 3 * 8);
        for frame in &frames {
            assert_eq!(frame.len(), 6);
            // Every value byte is zero whichever device the frame targets.
            for pair in frame.chunks(2) {
                assert_eq!(pair[1], 0x00);
            }
        }
    }

    #[test]
    fn failures_accumulate_without_aborting() {
        let mut disp = ready(2);
        disp.iface.fail_writes();
        assert_eq!(disp.display_char_on_device(b'E', 1), Err(Error::BusFailure));
        // All 8 rows were still attempted.
        assert_eq!(disp.iface.write_count(), 8);
    }

    #[test]
    fn scroll_of_empty_text_still_flushes_the_canvas() {
        let mut disp = ready(2);
        disp.scroll_text(b"").unwrap();
        // N x 8 flush steps, each writing the full canvas.
        let frames = disp.iface.frames();
        assert_eq!(frames.len(), 16 * 16);
        for frame in &frames {
            for pair in frame.chunks(2) {
                assert_eq!(pair[1], 0x00);
            }
        }
        assert_eq!(disp.iface.delays(), vec![SCROLL_STEP_US; 16]);
    }

    #[test]
    fn scroll_step_count_and_frame_count() {
        // 2 characters x 8 columns + 4 flush character-widths x 8 columns
        // = 48 steps; each step writes 4 x 8 targeted frames.
        let mut disp = ready(4);
        disp.scroll_text(b"HI").unwrap();
        assert_eq!(disp.iface.delays().len(), 48);
        // frames() also asserts each one is chip-select bracketed.
        assert_eq!(disp.iface.frames().len(), 1536);
    }

    #[test]
    fn scroll_shifts_a_glyph_in_column_by_column() {
        let mut disp = ready(1);
        disp.scroll_text(b"H").unwrap();
        let frames = disp.iface.frames();
        // 8 character columns + 8 flush columns, 8 frames per step.
        assert_eq!(frames.len(), 16 * 8);
        let glyph = crate::font::glyph(b'H');
        // After the 8th step the glyph is fully on the single device.
        for row in 0..8 {
            assert_eq!(frames[7 * 8 + row], vec![row as u8 + 1, glyph[row]]);
        }
        // After the flush the display is dark again.
        for row in 0..8 {
            assert_eq!(frames[15 * 8 + row], vec![row as u8 + 1, 0x00]);
        }
    }

    #[test]
    fn scroll_carries_bits_across_devices() {
        let mut disp = ready(2);
        disp.scroll_text(b"O").unwrap();
        let frames = disp.iface.frames();
        // 8 character columns + 16 flush columns, 16 frames per step.
        assert_eq!(frames.len(), 24 * 16);
        let glyph = crate::font::glyph(b'O');
        // After 8 steps the glyph sits on device 1 (nearest the master).
        let after_entry = &frames[7 * 16..8 * 16];
        for row in 0..8 {
            assert_eq!(after_entry[2 * row], vec![0x00, 0x00, row as u8 + 1, glyph[row]]);
            assert_eq!(after_entry[2 * row + 1], vec![row as u8 + 1, 0x00, 0x00, 0x00]);
        }
        // Eight steps later it has carried over to device 2 whole.
        let after_carry = &frames[15 * 16..16 * 16];
        for row in 0..8 {
            assert_eq!(after_carry[2 * row], vec![0x00, 0x00, row as u8 + 1, 0x00]);
            assert_eq!(after_carry[2 * row + 1], vec![row as u8 + 1, glyph[row], 0x00, 0x00]);
        }
    }

    #[test]
    fn scroll_reports_accumulated_failures_after_completing() {
        let mut disp = ready(1);
        disp.iface.fail_writes();
        assert_eq!(disp.scroll_text(b"X"), Err(Error::BusFailure));
        // Every one of the 16 steps still ran.
        assert_eq!(disp.iface.delays().len(), 16);
        assert_eq!(disp.iface.write_count(), 16 * 8);
    }

    #[test]
    fn single_digit_and_device_helpers() {
        let mut disp = ready(2);
        disp.write_digit(1, 3, 0x5a).unwrap();
        assert_eq!(disp.iface.frames(), vec![vec![0x00, 0x00, 0x03, 0x5a]]);
        disp.iface.clear();

        assert_eq!(disp.write_digit(1, 9, 0x5a), Err(Error::InvalidArgument));
        assert_eq!(disp.write_digit(3, 1, 0x5a), Err(Error::InvalidArgument));
        assert_eq!(disp.iface.events().len(), 0);

        disp.clear_digit(2, 8).unwrap();
        assert_eq!(disp.iface.frames(), vec![vec![0x08, 0x00, 0x00, 0x00]]);
        disp.iface.clear();

        disp.device_all_on(1).unwrap();
        let frames = disp.iface.frames();
        assert_eq!(frames.len(), 8);
        for (row, frame) in frames.iter().enumerate() {
            assert_eq!(frame, &vec![0x00, 0x00, row as u8 + 1, 0xff]);
        }
    }

    #[test]
    fn power_and_test_controls() {
        let mut disp = ready(2);
        disp.power(false).unwrap();
        disp.power(true).unwrap();
        disp.display_test(true).unwrap();
        disp.enable_device(2).unwrap();
        disp.disable_device(1).unwrap();
        assert_eq!(
            disp.iface.frames(),
            vec![
                vec![0x0c, 0x00, 0x0c, 0x00],
                vec![0x0c, 0x01, 0x0c, 0x01],
                vec![0x0f, 0x01, 0x0f, 0x01],
                vec![0x0c, 0x01, 0x00, 0x00],
                vec![0x00, 0x00, 0x0c, 0x00],
            ]
        );
        assert_eq!(disp.enable_device(3), Err(Error::InvalidArgument));
    }

    #[test]
    fn init_device_reconfigures_one_device() {
        let mut disp = ready(4);
        disp.init_device(3).unwrap();
        let frames = disp.iface.frames();
        assert_eq!(
            frames,
            vec![
                vec![0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00],
                vec![0x00, 0x00, 0x0a, 0x08, 0x00, 0x00, 0x00, 0x00],
                vec![0x00, 0x00, 0x0b, 0x07, 0x00, 0x00, 0x00, 0x00],
            ]
        );
        assert_eq!(disp.iface.delays(), vec![1, 1, 1]);
    }
}

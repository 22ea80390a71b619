/// Access to the SPI link shared by every device in a chain.
///
/// The three methods cover everything the protocol layer does with the
/// hardware: chip-select bracketing, blocking frame transfers, and settle
/// delays. Devices only latch a transfer when the chip-select line
/// deasserts, so the protocol layer brackets every `write` with a
/// `chip_select` pair.
pub trait ChainInterface {
    /// Drive the shared chip-select line. `asserted` is the logical state;
    /// implementations map it onto the electrical polarity of the line.
    fn chip_select(&mut self, asserted: bool);

    /// Clock `buf` out on the bus, blocking until every byte is out.
    fn write(&mut self, buf: &[u8]) -> Result<(), ()>;

    /// Block for `us` microseconds.
    fn delay_us(&mut self, us: u32);
}

pub mod spi {
    //! The `embedded-hal` implementation of the chain interface. The
    //! MAX7219's LOAD//CS pin latches on its rising edge, so the
    //! chip-select GPIO is driven low to assert and high to deassert.
    //!
    //! Bus bring-up (clock rate, MSB-first bit order, SPI mode 0) is the
    //! platform's job when it constructs the SPI peripheral handed in here.

    use embedded_hal as hal;

    use super::ChainInterface;

    pub struct SpiInterface<SPI, CS, D> {
        /// The SPI master device the chain's DIN and CLK lines hang off.
        spi: SPI,
        /// GPIO output wired to the LOAD//CS pin of every device.
        cs: CS,
        /// Microsecond delay provider for settle intervals.
        delay: D,
    }

    impl<SPI, CS, D> SpiInterface<SPI, CS, D>
    where
        SPI: hal::blocking::spi::Write<u8>,
        CS: hal::digital::v2::OutputPin,
        D: hal::blocking::delay::DelayUs<u32>,
    {
        /// Create a new SPI interface to communicate with a device chain.
        /// `spi` is the SPI master device, `cs` is the GPIO output wired to
        /// the shared LOAD//CS line, and `delay` provides settle delays.
        /// The chip-select line is deasserted immediately so the chain
        /// ignores unrelated bus traffic.
        pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
            let mut iface = Self { spi, cs, delay };
            iface.chip_select(false);
            iface
        }
    }

    impl<SPI, CS, D> ChainInterface for SpiInterface<SPI, CS, D>
    where
        SPI: hal::blocking::spi::Write<u8>,
        CS: hal::digital::v2::OutputPin,
        D: hal::blocking::delay::DelayUs<u32>,
    {
        fn chip_select(&mut self, asserted: bool) {
            if asserted {
                self.cs.set_low().ok();
            } else {
                self.cs.set_high().ok();
            }
        }

        fn write(&mut self, buf: &[u8]) -> Result<(), ()> {
            self.spi.write(buf).map_err(|_| ())
        }

        fn delay_us(&mut self, us: u32) {
            self.delay.delay_us(us);
        }
    }
}

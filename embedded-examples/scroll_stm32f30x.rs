//! Full example code for driving a bank of MAX7219 8x8 LED matrices. This
//! runs on an STM32F303RE with four cascaded modules on SPI1 and PA8 for
//! the shared LOAD//CS line.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate max7219;
extern crate panic_abort;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use hal::spi;
use max7219 as led;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the chain is connected.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);

    // Set up SPI1, which is Alternate Function 5 for GPIOs PA5,6,7. The
    // MAX7219 wants MSB-first mode-0 transfers and tops out at 10 MHz.
    let led_sck = gpioa.pa5.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let led_miso = gpioa.pa6.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let led_mosi = gpioa.pa7.into_af5(&mut gpioa.moder, &mut gpioa.afrl);

    let led_spi = spi::Spi::spi1(
        dp.SPI1,
        (led_sck, led_miso, led_mosi),
        hal_api::spi::Mode {
            polarity: hal_api::spi::Polarity::IdleLow,
            phase: hal_api::spi::Phase::CaptureOnFirstTransition,
        },
        1.mhz(),
        clocks,
        &mut rcc.apb2,
    );

    // PA8 drives the LOAD//CS pin shared by every module in the chain.
    let led_cs = gpioa
        .pa8
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // Create the SpiInterface and Display for a four-module bank.
    let mut disp = led::Display::new(
        led::SpiInterface::new(led_spi, led_cs, delay),
        led::Config::new(4).intensity(8),
    );

    // Configure all four devices and blank them.
    disp.init().unwrap();

    loop {
        disp.scroll_text(b"HELLO ").unwrap();
    }
}

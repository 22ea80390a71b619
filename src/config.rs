//! The chain configuration written to the control registers during
//! `Display::init`. Immutable once initialization has run.

use crate::command::consts::MAX_DEVICES;
use crate::error::Error;

/// Register settings shared by every device in the chain.
///
/// The chain length is mandatory because the frame layout depends on it, so
/// it must be provided in the constructor. The remaining registers default
/// to workable dot-matrix settings and can be overridden with the builder
/// methods.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) num_devices: u8,
    pub(crate) decode_mode: u8,
    pub(crate) intensity: u8,
    pub(crate) scan_limit: u8,
}

impl Config {
    /// A configuration for a chain of `num_devices` devices (1-8): BCD
    /// decode off, half intensity, all 8 digit rows scanned.
    pub fn new(num_devices: u8) -> Self {
        Config {
            num_devices,
            decode_mode: 0x00,
            intensity: 8,
            scan_limit: 8,
        }
    }

    /// Extend this `Config` with an explicit decode-mode register mask.
    /// Each set bit enables BCD decode for one digit; a dot matrix wants
    /// the default 0x00.
    pub fn decode_mode(self, mask: u8) -> Self {
        Self {
            decode_mode: mask,
            ..self
        }
    }

    /// Extend this `Config` with an explicit brightness, 0 (dimmest) to 15.
    pub fn intensity(self, intensity: u8) -> Self {
        Self { intensity, ..self }
    }

    /// Extend this `Config` with the number of digit rows scanned, 1 to 8.
    /// Written to the scan-limit register as `digits - 1`.
    pub fn scan_limit(self, digits: u8) -> Self {
        Self {
            scan_limit: digits,
            ..self
        }
    }

    /// Check every field against its register range. Runs before `init`
    /// touches the bus, so a bad configuration never reaches the chain.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.num_devices == 0 || self.num_devices as usize > MAX_DEVICES {
            return Err(Error::InvalidArgument);
        }
        if self.intensity > 0x0f {
            return Err(Error::InvalidArgument);
        }
        if self.scan_limit == 0 || self.scan_limit > 8 {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// The number of devices in the chain.
    pub fn num_devices(&self) -> u8 {
        self.num_devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new(4);
        assert_eq!(config.num_devices, 4);
        assert_eq!(config.decode_mode, 0x00);
        assert_eq!(config.intensity, 8);
        assert_eq!(config.scan_limit, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = Config::new(2).decode_mode(0xff).intensity(15).scan_limit(4);
        assert_eq!(config.decode_mode, 0xff);
        assert_eq!(config.intensity, 15);
        assert_eq!(config.scan_limit, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_catches_bad_ranges() {
        assert_eq!(Config::new(0).validate(), Err(Error::InvalidArgument));
        assert_eq!(Config::new(9).validate(), Err(Error::InvalidArgument));
        assert_eq!(
            Config::new(4).intensity(16).validate(),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            Config::new(4).scan_limit(0).validate(),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            Config::new(4).scan_limit(9).validate(),
            Err(Error::InvalidArgument)
        );
    }
}

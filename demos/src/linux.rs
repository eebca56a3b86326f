use anyhow::{anyhow, Error, Result};
pub use linux_embedded_hal::{
    gpio_cdev::{Chip, LineRequestFlags},
    spidev::{SpiModeFlags, SpidevOptions},
    CdevPin, Delay, SpidevDevice,
};

extern crate std;
use std::{env, format};

/// The GPIO chip and SPI bus a radio is wired to.
pub struct BoardHardware {
    gpio: Chip,
}

impl BoardHardware {
    /// Open `/dev/gpiochip{chip}`.
    pub fn new(chip: u8) -> Result<Self> {
        let gpio = Chip::new(format!("/dev/gpiochip{chip}"))
            .map_err(|_| anyhow!("/dev/gpiochip{chip} is not available on this system"))?;
        Ok(Self { gpio })
    }

    /// Use `/dev/gpiochip4` (Raspberry Pi 5 on older kernels), falling back to `/dev/gpiochip0`.
    #[allow(
        clippy::should_implement_trait,
        reason = "Default trait does not support `-> Result<Self>`"
    )]
    pub fn default() -> Result<Self> {
        Self::new(4).or_else(|_| Self::new(0))
    }

    /// Open and configure `/dev/spidev{bus}.{cs}` for the nRF24L01 (mode 0, 10 MHz).
    pub fn spi_device(bus: u8, cs: u8) -> Result<SpidevDevice> {
        let mut spi = SpidevDevice::open(format!("/dev/spidev{bus}.{cs}"))
            .map_err(|_| anyhow!("/dev/spidev{bus}.{cs} is not available on this system"))?;
        let options = SpidevOptions::new()
            .max_speed_hz(10_000_000)
            .mode(SpiModeFlags::SPI_MODE_0)
            .bits_per_word(8)
            .build();
        spi.configure(&options).map_err(Error::from)?;
        Ok(spi)
    }

    pub fn default_spi_device() -> Result<SpidevDevice> {
        Self::spi_device(0, 0)
    }

    /// Request GPIO `line` as the radio's CE pin (initially low).
    pub fn ce_pin(&mut self, line: u32) -> Result<CdevPin> {
        let handle = self
            .gpio
            .get_line(line)
            .map_err(|_| anyhow!("GPIO{line} is not available"))?
            .request(LineRequestFlags::OUTPUT, 0, "rf24link-rs")
            .map_err(Error::from)?;
        CdevPin::new(handle).map_err(Error::from)
    }

    pub fn default_ce_pin(&mut self) -> Result<CdevPin> {
        self.ce_pin(22)
    }
}

/// The logical channel given as the first command line argument, if any.
pub fn channel_arg() -> Result<Option<u8>> {
    env::args()
        .nth(1)
        .map(|arg| {
            arg.parse::<u8>()
                .map_err(|_| anyhow!("{arg} is not a valid channel number"))
        })
        .transpose()
}

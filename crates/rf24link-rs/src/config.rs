use crate::types::MAX_PAYLOAD_LENGTH;
use rf24::{DataRate, PaLevel};

/// An object to configure a [`LinkController`](struct@crate::LinkController).
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`LinkConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use rf24link::LinkConfig;
///
/// let config = LinkConfig::default().with_channel_stride(4);
/// assert_eq!(config.channel_stride(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkConfig {
    pa_level: PaLevel,
    data_rate: DataRate,
    payload_length: u8,
    auto_retry_delay: u8,
    auto_retry_count: u8,
    channel_stride: u8,
    channel_settle_us: u32,
    address_settle_us: u32,
    power_up_settle_us: u32,
    print_details: bool,
}

impl Default for LinkConfig {
    /// Instantiate a [`LinkConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`LinkConfig::pa_level()`] | [`PaLevel::Low`] |
    /// | [`LinkConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`LinkConfig::payload_length()`] | `32` |
    /// | [`LinkConfig::auto_retry_delay()`] | `1` |
    /// | [`LinkConfig::auto_retry_count()`] | `1` |
    /// | [`LinkConfig::channel_stride()`] | `8` |
    /// | [`LinkConfig::channel_settle_us()`] | `10000` |
    /// | [`LinkConfig::address_settle_us()`] | `5000` |
    /// | [`LinkConfig::power_up_settle_us()`] | `5000` |
    /// | [`LinkConfig::print_details()`] | `false` |
    fn default() -> Self {
        Self {
            pa_level: PaLevel::Low,
            data_rate: DataRate::Mbps1,
            payload_length: MAX_PAYLOAD_LENGTH as u8,
            /*
               - 1 * 250 + 250 = 500 us delay between attempts
               - 1 retry
            */
            auto_retry_delay: 1,
            auto_retry_count: 1,
            channel_stride: 8,
            channel_settle_us: 10_000,
            address_settle_us: 5_000,
            power_up_settle_us: 5_000,
            print_details: false,
        }
    }
}

impl LinkConfig {
    /// Returns the value set by [`LinkConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// The Power Amplitude (PA) level applied at bring-up and reset.
    pub fn with_pa_level(self, pa_level: PaLevel) -> Self {
        Self { pa_level, ..self }
    }

    /// Returns the value set by [`LinkConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air) applied at bring-up and reset.
    ///
    /// Both peers of a link must use the same data rate.
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`LinkConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// The static payload length written to the radio.
    ///
    /// The link always uses dynamic payloads, so this only matters to a peer that
    /// does not. The given `length` is clamped to the range [1, 32].
    pub fn with_payload_length(self, length: u8) -> Self {
        Self {
            payload_length: length.clamp(1, MAX_PAYLOAD_LENGTH as u8),
            ..self
        }
    }

    /// Returns the `delay` value set by [`LinkConfig::with_auto_retries()`].
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retry_delay
    }

    /// Returns the `count` value set by [`LinkConfig::with_auto_retries()`].
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retry_count
    }

    /// The hardware retry policy used by the [`Sender`](crate::Role::Sender) role.
    ///
    /// Both parameters are clamped to range [0, 15].
    /// - `delay`: How long to wait between each retry, in multiples of
    ///   250 us (microseconds), offset by 250 us.
    /// - `count`: How many retries before giving up.
    ///
    /// The default policy (1 retry after 500 us) keeps
    /// [`LinkController::send()`](fn@crate::LinkController::send) latency low.
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retry_delay: delay.min(15),
            auto_retry_count: count.min(15),
            ..self
        }
    }

    /// Returns the value set by [`LinkConfig::with_channel_stride()`].
    pub const fn channel_stride(&self) -> u8 {
        self.channel_stride
    }

    /// The factor that scales a logical channel to the radio's channel.
    ///
    /// The resulting radio channel is clamped to 125.
    pub fn with_channel_stride(self, stride: u8) -> Self {
        Self {
            channel_stride: stride,
            ..self
        }
    }

    /// Returns the value set by [`LinkConfig::with_channel_settle_us()`].
    pub const fn channel_settle_us(&self) -> u32 {
        self.channel_settle_us
    }

    /// Microseconds to wait before and after changing the radio's channel.
    pub fn with_channel_settle_us(self, delay: u32) -> Self {
        Self {
            channel_settle_us: delay,
            ..self
        }
    }

    /// Returns the value set by [`LinkConfig::with_address_settle_us()`].
    pub const fn address_settle_us(&self) -> u32 {
        self.address_settle_us
    }

    /// Microseconds to wait after leaving RX mode during
    /// [`LinkController::switch_address()`](fn@crate::LinkController::switch_address)
    /// and [`LinkController::reset()`](fn@crate::LinkController::reset).
    pub fn with_address_settle_us(self, delay: u32) -> Self {
        Self {
            address_settle_us: delay,
            ..self
        }
    }

    /// Returns the value set by [`LinkConfig::with_power_up_settle_us()`].
    pub const fn power_up_settle_us(&self) -> u32 {
        self.power_up_settle_us
    }

    /// Microseconds to wait after powering up the radio.
    ///
    /// <div class="warning">
    ///
    /// The nRF24L01 needs up to 5 milliseconds (Tpd2stby) to leave power down mode.
    /// Lowering this value may corrupt the first operations after
    /// [`LinkController::power_up()`](fn@crate::LinkController::power_up).
    ///
    /// </div>
    pub fn with_power_up_settle_us(self, delay: u32) -> Self {
        Self {
            power_up_settle_us: delay,
            ..self
        }
    }

    /// Returns the value set by [`LinkConfig::with_print_details()`].
    pub const fn print_details(&self) -> bool {
        self.print_details
    }

    /// Dump the radio's configuration after every channel change,
    /// address switch and reset.
    ///
    /// This only produces output when the `defmt` or `std` feature is enabled.
    pub fn with_print_details(self, enable: bool) -> Self {
        Self {
            print_details: enable,
            ..self
        }
    }
}

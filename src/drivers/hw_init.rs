//! One-shot hardware peripheral initialization and raw pin primitives.
//!
//! Configures the ADC1 oneshot unit for the probe signal pins and every
//! output pin (probe power, relays) using raw ESP-IDF sys calls.  Called
//! once from `main()` before the executor starts.
//!
//! On host targets the primitives are backed by a simulated pin bank so
//! the rest of the firmware runs unchanged in tests and simulations.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::error::Error;
#[cfg(any(target_os = "espidf", test))]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        match e {
            HwInitError::AdcInitFailed(_) => Error::Init("ADC1 oneshot unit"),
            HwInitError::GpioConfigFailed(_) => Error::Init("GPIO outputs"),
        }
    }
}

/// ADC1 channel wired to `gpio` (ESP32-S3: GPIO1..=10 → CH0..=9).
pub fn adc1_channel(gpio: u8) -> Option<u32> {
    match gpio {
        1..=10 => Some(u32::from(gpio) - 1),
        _ => None,
    }
}

#[cfg(target_os = "espidf")]
use log::{info, warn};

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the executor; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_outputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// executor's sensor read path.  `init_adc()` completes before the
/// executor starts, so there is no concurrent access.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for &pin in &pins::ADC_PINS {
        let Some(channel) = adc1_channel(pin) else {
            return Err(HwInitError::AdcInitFailed(ESP_ERR_INVALID_ARG as i32));
        };
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!("hw_init: ADC1 configured (moisture=GPIO{}, water level=GPIO{})",
        pins::MOISTURE_ADC_GPIO, pins::WATER_LEVEL_ADC_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc_read(pin: u8) -> u16 {
    let Some(channel) = adc1_channel(pin) else {
        warn!("hw_init: GPIO{} has no ADC1 channel", pin);
        return 0;
    };
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded executor access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc_read(pin: u8) -> u16 {
    sim::adc(pin)
}

// ── GPIO ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    for &pin in &pins::OUTPUT_PINS {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(i32::from(pin), 0) };
    }

    info!("hw_init: GPIO outputs configured (all low)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: u8) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured pin.
    (unsafe { gpio_get_level(i32::from(pin)) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: u8) -> bool {
    sim::level(pin)
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: u8, high: bool) {
    // SAFETY: gpio_set_level writes to an output pin configured in
    // init_gpio_outputs(). Executor context only.
    unsafe { gpio_set_level(i32::from(pin), u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: u8, high: bool) {
    sim::set_level(pin, high);
}

// ── Simulated pin bank (host) ─────────────────────────────────

/// In-memory pin bank behind the host primitives.  Tests and host
/// simulations script ADC values and input levels here and read back
/// what the firmware drove.
#[cfg(not(target_os = "espidf"))]
pub mod sim {
    use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

    const PIN_COUNT: usize = 49;

    static LEVELS: [AtomicBool; PIN_COUNT] = [const { AtomicBool::new(false) }; PIN_COUNT];
    static ADC: [AtomicU16; PIN_COUNT] = [const { AtomicU16::new(0) }; PIN_COUNT];

    /// Script the raw ADC value returned for `pin`.
    pub fn set_adc(pin: u8, raw: u16) {
        if let Some(slot) = ADC.get(usize::from(pin)) {
            slot.store(raw, Ordering::Relaxed);
        }
    }

    pub fn adc(pin: u8) -> u16 {
        ADC.get(usize::from(pin)).map_or(0, |slot| slot.load(Ordering::Relaxed))
    }

    /// Drive `pin` as if an external signal (or the firmware) set it.
    pub fn set_level(pin: u8, high: bool) {
        if let Some(slot) = LEVELS.get(usize::from(pin)) {
            slot.store(high, Ordering::Relaxed);
        }
    }

    pub fn level(pin: u8) -> bool {
        LEVELS.get(usize::from(pin)).is_some_and(|slot| slot.load(Ordering::Relaxed))
    }
}

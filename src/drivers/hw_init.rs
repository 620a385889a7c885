//! One-shot hardware peripheral initialization.
//!
//! Configures the three tapped GPIOs, installs the door-edge ISR, and
//! arms the light-sleep wake source using raw ESP-IDF sys calls.
//! Called once from `main()` before the injection loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    IsrInstallFailed(i32),
    WakeConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::IsrInstallFailed(rc) => {
                write!(f, "GPIO ISR service install failed (rc={})", rc)
            }
            Self::WakeConfigFailed(rc) => write!(f, "sleep wake config failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the injection loop;
    // single-threaded.
    unsafe {
        init_door_sense()?;
        init_injection_lines()?;
        init_sleep_wake()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Door sense input ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_door_sense() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::DOOR_SENSE_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_NEGEDGE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    info!("hw_init: door sense input configured");
    Ok(())
}

// ── Injection lines ───────────────────────────────────────────
//
// Both lines get their output latch preset LOW once, here.  After that
// the adapters only toggle the pin *direction*: output mode re-engages
// the latched low, input mode floats and the console pull-up reads high.

#[cfg(target_os = "espidf")]
unsafe fn init_injection_lines() -> Result<(), HwInitError> {
    for pin in [pins::DATA_GPIO, pins::GATE_GPIO] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe {
            gpio_set_level(pin, 0);
            // Start released: normal laser↔controller traffic must see
            // an untouched line until a cycle takes over.
            gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_INPUT);
        }
    }
    info!("hw_init: injection lines preset low, released");
    Ok(())
}

/// Release a line to high-impedance (reads HIGH via the console pull-up).
#[cfg(target_os = "espidf")]
pub fn line_release(pin: i32) {
    // SAFETY: direction toggle on a pin configured in
    // init_injection_lines(); main-context only.
    unsafe {
        gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_INPUT);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn line_release(_pin: i32) {}

/// Drive a line low (output mode re-engages the latched low level).
#[cfg(target_os = "espidf")]
pub fn line_drive_low(pin: i32) {
    // SAFETY: see line_release.
    unsafe {
        gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn line_drive_low(_pin: i32) {}

// ── Door sampling + edge masking (ISR context) ────────────────

#[cfg(target_os = "espidf")]
pub fn door_closed() -> bool {
    // SAFETY: gpio_get_level is a register read; safe in ISR context.
    (unsafe { gpio_get_level(pins::DOOR_SENSE_GPIO) }) == 0
}

#[cfg(target_os = "espidf")]
pub fn door_intr_disable() {
    // SAFETY: per-pin interrupt mask write; safe in ISR context.
    unsafe {
        gpio_intr_disable(pins::DOOR_SENSE_GPIO);
    }
}

#[cfg(target_os = "espidf")]
pub fn door_intr_enable() {
    // SAFETY: see door_intr_disable.
    unsafe {
        gpio_intr_enable(pins::DOOR_SENSE_GPIO);
    }
}

// ── Light-sleep wake source ───────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_sleep_wake() -> Result<(), HwInitError> {
    // Wake on the door line held low: the edge interrupt does the
    // arming, the level wake only gets the main loop running again.
    let ret = unsafe {
        gpio_wakeup_enable(pins::DOOR_SENSE_GPIO, gpio_int_type_t_GPIO_INTR_LOW_LEVEL)
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::WakeConfigFailed(ret));
    }
    let ret = unsafe { esp_sleep_enable_gpio_wakeup() };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::WakeConfigFailed(ret));
    }
    info!("hw_init: light-sleep wake armed on door sense");
    Ok(())
}

// ── GPIO ISR Service ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe extern "C" fn door_gpio_isr(_arg: *mut core::ffi::c_void) {
    crate::drivers::door::door_isr_handler();
}

/// Install the GPIO ISR service and register the door-edge handler.
/// Call after init_peripherals() and before the injection loop.
#[cfg(target_os = "espidf")]
pub fn init_isr_service() -> Result<(), HwInitError> {
    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable).  The handler registered
    // below runs the debounce with further door edges masked.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK && ret != ESP_ERR_INVALID_STATE {
            return Err(HwInitError::IsrInstallFailed(ret));
        }

        gpio_isr_handler_add(
            pins::DOOR_SENSE_GPIO,
            Some(door_gpio_isr),
            core::ptr::null_mut(),
        );
        gpio_intr_enable(pins::DOOR_SENSE_GPIO);

        info!("hw_init: ISR service installed (door sense)");
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}

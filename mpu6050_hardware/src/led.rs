use embedded_hal::digital::StatefulOutputPin;
use stm32f4xx_hal::gpio::{Output, PushPull, PD12, PD14};

pub type GreenLed = PD12<Output<PushPull>>;
pub type RedLed = PD14<Output<PushPull>>;

/// An LED on any push-pull pin.
pub struct StatusLed<P> {
    pin: P,
}

impl<P: StatefulOutputPin> StatusLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn turn_on(&mut self) {
        self.pin.set_high().ok();
    }

    pub fn turn_off(&mut self) {
        self.pin.set_low().ok();
    }

    pub fn toggle(&mut self) {
        self.pin.toggle().ok();
    }
}

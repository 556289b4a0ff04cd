use stm32f4xx_hal::{pac::USART1, serial::Tx};

/// USART1 TX on PA9, 115200 baud.
pub type DebugSerialPort = Tx<USART1>;

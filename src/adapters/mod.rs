//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                 |
//! |-------------|--------------------|-----------------------------|
//! | `board`     | PinPort            | ESP32 ADC1, GPIO            |
//! | `hardware`  | ActuatorPort       | Pump / valve relay drivers  |
//! | `log_sink`  | EventSink          | Serial log output           |
//! | `telemetry` | DataProcessPort    | Periodic telemetry events   |
//! | `time`      | DelayNs            | FreeRTOS / ROM delays       |

pub mod board;
pub mod hardware;
pub mod log_sink;
pub mod telemetry;
pub mod time;

//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements           | Connects to                     |
//! |------------|----------------------|---------------------------------|
//! | `gpio`     | ButtonSource         | embedded-hal `InputPin`s        |
//! |            | LedSink              | embedded-hal `SetDutyCycle` / `OutputPin` |
//! | `hardware` | ButtonSource+LedSink | any button source + LED sink    |
//! | `log_sink` | EventSink            | `log` facade                    |
//! | `sim`      | ButtonSource         | scripted presses (host)         |
//! |            | LedSink, EventSink   | in-memory recorders (host)      |

pub mod gpio;
pub mod hardware;
pub mod log_sink;
pub mod sim;

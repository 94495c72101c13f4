//! Host-side implementations: stdout transport, wall-clock time and a
//! bridge from the `log` facade onto the serial line format. The main
//! development and test vehicle for the facility.

pub mod facade;
pub mod stdout;
pub mod time;

pub use facade::{FacadeLogger, install};
pub use stdout::StdoutTransport;
pub use time::SystemTimeSource;

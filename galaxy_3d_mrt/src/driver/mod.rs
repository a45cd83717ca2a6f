/// Graphics driver module - the driver entry points the MRT core depends on

pub mod graphics_driver;
pub mod mock_driver;

pub use graphics_driver::*;

// Ports - boundary between the library and the host test harness

pub mod provided;
pub mod required;

pub use provided::*;
pub use required::*;

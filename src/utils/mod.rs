pub mod logging;
pub mod percentage;

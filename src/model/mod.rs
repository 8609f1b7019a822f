pub mod confusion;
pub mod curves;
pub mod histogram;
pub mod result;
pub mod threshold;

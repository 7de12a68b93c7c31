pub mod gamma;
pub mod histogram;

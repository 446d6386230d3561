// Driver modules
pub mod console;
pub mod driver;
pub mod error;

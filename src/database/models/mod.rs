pub mod application;
pub mod farmer;
pub mod scheme;

pub use application::Application;
pub use farmer::{Farmer, FarmerCredentials, Location, NewFarmer};
pub use scheme::{Eligibility, Scheme};

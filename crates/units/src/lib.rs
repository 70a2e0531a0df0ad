pub mod length;
pub mod mass;
pub mod time;


pub use length::{Length, AU_TO_M};
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use time::{Time, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR};

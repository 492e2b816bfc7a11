//! Basic types shared across APIs: request correlation and time periods.

mod time_period;
mod x_correlator;

pub use time_period::TimePeriod;
pub use x_correlator::XCorrelator;

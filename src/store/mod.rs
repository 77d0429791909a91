pub mod booking;
pub mod hotel;

pub use booking::{Booking, Bookings, Revenue};
pub use hotel::{Checkout, Store};

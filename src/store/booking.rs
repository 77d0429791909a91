use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One active stay. `total_charge` is fixed when the booking is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub customer_name: String,
    pub room_number: i64,
    pub nights: i64,
    pub rate_per_night: f64,
    pub total_charge: f64,
}

impl Booking {
    pub fn new(customer_name: &str, room_number: i64, nights: i64, rate_per_night: f64) -> Self {
        Booking {
            customer_name: customer_name.to_string(),
            room_number,
            nights,
            rate_per_night,
            total_charge: nights as f64 * rate_per_night,
        }
    }

    /// Field name and rendered value pairs, in file order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("customer_name", self.customer_name.clone()),
            ("room_number", self.room_number.to_string()),
            ("nights", self.nights.to_string()),
            ("rate_per_night", format_amount(self.rate_per_night)),
            ("total_charge", format_amount(self.total_charge)),
        ]
    }
}

/// Renders an amount the way it is written to the booking file: `200.0`, not `200`.
///
/// Very large and very small amounts use a signed, two-digit exponent (`1e+16`, `1.5e-07`).
pub fn format_amount(amount: f64) -> String {
    let repr = format!("{:?}", amount);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Sum of `total_charge` over a set of bookings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revenue {
    pub total: f64,
    pub bookings: usize,
}

impl fmt::Display for Revenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // nothing summed is a plain 0, not an amount
        if self.bookings == 0 {
            return write!(f, "0");
        }
        write!(f, "{}", format_amount(self.total))
    }
}

/// Customer name to booking, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookings(IndexMap<String, Booking>);

impl Bookings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the booking's customer name, replacing any earlier booking in place.
    pub fn insert(&mut self, booking: Booking) -> Option<Booking> {
        self.0.insert(booking.customer_name.clone(), booking)
    }

    pub fn remove(&mut self, customer_name: &str) -> Option<Booking> {
        self.0.shift_remove(customer_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Booking)> {
        self.0.iter().map(|(name, booking)| (name.as_str(), booking))
    }

    pub fn revenue(&self) -> Revenue {
        Revenue {
            total: self.0.values().map(|booking| booking.total_charge).sum(),
            bookings: self.len(),
        }
    }
}

impl FromIterator<Booking> for Bookings {
    fn from_iter<I: IntoIterator<Item = Booking>>(iter: I) -> Self {
        let mut bookings = Bookings::new();
        for booking in iter {
            bookings.insert(booking);
        }
        bookings
    }
}

impl fmt::Display for Bookings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No bookings found.");
        }

        for (customer, booking) in self.iter() {
            writeln!(f, "Customer: {}", customer)?;
            for (field, value) in booking.fields() {
                writeln!(f, "  {}: {}", field, value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;
use tracing::{debug, info};

use super::booking::{Booking, Bookings, Revenue};
use crate::error::{HotelError, Result};

pub const DEFAULT_DATA_FILE: &str = "hotel_data.json";

/// Outcome of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
    CheckedOut,
    NotFound,
    /// The booking file does not exist at all.
    NoBookings,
}

/// File-backed booking store.
///
/// Holds nothing but the file path: every operation loads the whole file,
/// works on its own copy and writes the whole file back if it changed anything.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the file does not exist.
    async fn read(&self) -> Result<Option<Bookings>> {
        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "booking file absent");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let bookings: Bookings = serde_json::from_slice(&contents)?;
        debug!(path = %self.path.display(), entries = bookings.len(), "loaded bookings");
        Ok(Some(bookings))
    }

    pub async fn load(&self) -> Result<Bookings> {
        Ok(self.read().await?.unwrap_or_default())
    }

    /// Overwrites the file with `bookings`, indented by four spaces.
    ///
    /// Refuses bookings with infinite or NaN amounts, which JSON cannot hold.
    pub async fn save(&self, bookings: &Bookings) -> Result<()> {
        if let Some((customer, _)) = bookings.iter().find(|(_, booking)| {
            !booking.rate_per_night.is_finite() || !booking.total_charge.is_finite()
        }) {
            return Err(HotelError::NonFiniteAmount(customer.to_string()));
        }

        let mut body = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));
        bookings.serialize(&mut serializer)?;

        fs::write(&self.path, body).await?;
        debug!(path = %self.path.display(), entries = bookings.len(), "saved bookings");
        Ok(())
    }

    pub async fn add_booking(
        &self,
        customer_name: &str,
        room_number: i64,
        nights: i64,
        rate_per_night: f64,
    ) -> Result<Booking> {
        let mut bookings = self.load().await?;
        let booking = Booking::new(customer_name, room_number, nights, rate_per_night);

        if bookings.insert(booking.clone()).is_some() {
            info!(customer = customer_name, "replaced existing booking");
        }
        self.save(&bookings).await?;

        info!(customer = customer_name, room = room_number, "added booking");
        Ok(booking)
    }

    pub async fn view_bookings(&self) -> Result<Bookings> {
        self.load().await
    }

    pub async fn checkout(&self, customer_name: &str) -> Result<Checkout> {
        let Some(mut bookings) = self.read().await? else {
            return Ok(Checkout::NoBookings);
        };

        if bookings.remove(customer_name).is_none() {
            return Ok(Checkout::NotFound);
        }

        self.save(&bookings).await?;
        info!(customer = customer_name, "checked out");
        Ok(Checkout::CheckedOut)
    }

    pub async fn calculate_revenue(&self) -> Result<Revenue> {
        Ok(self.load().await?.revenue())
    }
}

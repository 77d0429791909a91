pub mod config;
pub mod console;
pub mod error;
pub mod parser;
pub mod store;

#[cfg(test)]
mod scratch;

use error::Result;
use store::hotel::{Checkout, Store};

pub const FAREWELL: &str = "Exiting the system. Have a great day!";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddBooking {
        customer_name: String,
        room_number: i64,
        nights: i64,
        rate_per_night: f64,
    },
    ViewBookings,
    Checkout(String),
    CalculateRevenue,
    Exit,
}

impl Command {
    /// Runs the command against `store` and returns the text to show the operator.
    pub async fn execute(&self, store: &Store) -> Result<String> {
        Ok(match self {
            Command::AddBooking {
                customer_name,
                room_number,
                nights,
                rate_per_night,
            } => {
                store
                    .add_booking(customer_name, *room_number, *nights, *rate_per_night)
                    .await?;
                format!("Booking added for {} in room {}.\n", customer_name, room_number)
            }
            Command::ViewBookings => store.view_bookings().await?.to_string(),
            Command::Checkout(customer_name) => match store.checkout(customer_name).await? {
                Checkout::CheckedOut => format!("Checked out {}.\n", customer_name),
                Checkout::NotFound => format!("No booking found for {}.\n", customer_name),
                Checkout::NoBookings => "No bookings found.\n".to_string(),
            },
            Command::CalculateRevenue => {
                let revenue = store.calculate_revenue().await?;
                format!("Total Revenue: ${}\n", revenue)
            }
            Command::Exit => format!("{}\n", FAREWELL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch::ScratchStore;

    fn add(name: &str, room_number: i64, nights: i64, rate_per_night: f64) -> Command {
        Command::AddBooking {
            customer_name: name.to_string(),
            room_number,
            nights,
            rate_per_night,
        }
    }

    #[tokio::test]
    async fn add_booking_confirms_customer_and_room() {
        let store = ScratchStore::new("command-add");

        let response = add("Alice", 101, 2, 100.0)
            .execute(&store)
            .await
            .expect("expected add to succeed");

        assert_eq!(response, "Booking added for Alice in room 101.\n");
    }

    #[tokio::test]
    async fn checkout_reports_each_outcome() {
        let store = ScratchStore::new("command-checkout");
        let checkout = Command::Checkout("Alice".to_string());

        let absent = checkout.execute(&store).await.expect("absent file");
        assert_eq!(absent, "No bookings found.\n");

        add("Alice", 101, 2, 100.0).execute(&store).await.expect("add");
        let removed = checkout.execute(&store).await.expect("checkout");
        assert_eq!(removed, "Checked out Alice.\n");

        let missing = checkout.execute(&store).await.expect("missing name");
        assert_eq!(missing, "No booking found for Alice.\n");
    }

    #[tokio::test]
    async fn calculate_revenue_renders_an_amount() {
        let store = ScratchStore::new("command-revenue");

        let empty = Command::CalculateRevenue.execute(&store).await.expect("empty");
        assert_eq!(empty, "Total Revenue: $0\n");

        add("Alice", 101, 2, 100.0).execute(&store).await.expect("add");
        let total = Command::CalculateRevenue.execute(&store).await.expect("total");
        assert_eq!(total, "Total Revenue: $200.0\n");

        Command::Checkout("Alice".to_string())
            .execute(&store)
            .await
            .expect("checkout");
        let emptied = Command::CalculateRevenue.execute(&store).await.expect("emptied");
        assert_eq!(emptied, "Total Revenue: $0\n");
    }

    #[tokio::test]
    async fn exit_says_goodbye_without_touching_the_store() {
        let store = ScratchStore::new("command-exit");

        let response = Command::Exit.execute(&store).await.expect("exit");

        assert_eq!(response, "Exiting the system. Have a great day!\n");
        assert!(!store.path().exists());
    }
}

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::error::{HotelError, Result};
use crate::parser::{MenuChoice, Parser};
use crate::store::hotel::Store;
use crate::Command;

const MENU: &str = "\n--- Hotel Accounting System ---\n\
                    1. Add Booking\n\
                    2. View Bookings\n\
                    3. Checkout Customer\n\
                    4. Calculate Revenue\n\
                    5. Exit\n";

const INVALID_CHOICE: &str = "Invalid choice. Please enter a number from 1 to 5.\n";

/// Menu-driven session over any line reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    store: Store,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, store: Store) -> Self {
        Self {
            reader,
            writer,
            store,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Runs until the operator picks Exit or input ends at the menu prompt.
    pub async fn start(&mut self) -> Result<()> {
        loop {
            self.write(MENU).await?;

            let Some(line) = self.prompt("Choose an option (1-5): ").await? else {
                info!("input closed at menu, leaving");
                break;
            };

            let choice = match Parser::parse_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    debug!("{}", e);
                    self.write(INVALID_CHOICE).await?;
                    continue;
                }
            };

            let command = self.read_command(choice).await?;
            let response = command.execute(&self.store).await?;
            self.write(&response).await?;

            if command == Command::Exit {
                break;
            }
        }

        Ok(())
    }

    async fn read_command(&mut self, choice: MenuChoice) -> Result<Command> {
        Ok(match choice {
            MenuChoice::AddBooking => {
                let customer_name = self.require("Enter customer name: ", "customer name").await?;
                let room_number = self.require("Enter room number: ", "room number").await?;
                let room_number = Parser::parse_integer("room number", &room_number)?;
                let nights = self.require("Enter number of nights: ", "nights").await?;
                let nights = Parser::parse_integer("nights", &nights)?;
                let rate = self.require("Enter rate per night: ", "rate per night").await?;
                let rate_per_night = Parser::parse_decimal("rate per night", &rate)?;

                Command::AddBooking {
                    customer_name,
                    room_number,
                    nights,
                    rate_per_night,
                }
            }
            MenuChoice::ViewBookings => Command::ViewBookings,
            MenuChoice::Checkout => {
                let customer_name = self
                    .require("Enter customer name for checkout: ", "customer name")
                    .await?;
                Command::Checkout(customer_name)
            }
            MenuChoice::CalculateRevenue => Command::CalculateRevenue,
            MenuChoice::Exit => Command::Exit,
        })
    }

    /// `None` once the input is exhausted.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text).await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        Ok(Some(Parser::strip_line_ending(&line).to_string()))
    }

    async fn require(&mut self, text: &str, field: &'static str) -> Result<String> {
        self.prompt(text)
            .await?
            .ok_or(HotelError::InputClosed(field))
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

//! Stock-price statistics menu.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::debug;

use tallybook_series::{NumericSeries, parse_decimal, parse_series};

use crate::prompt::{Console, Reply};

const INVALID_CHOICE: &str = "Invalid choice. The options are: 0, 1, 2, 3 or 4";
const CANCEL: &str = "0";

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockOption {
    Quit,
    Average,
    Maximum,
    Occurrences,
    CumulativeSum,
}

impl StockOption {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            0 => Some(Self::Quit),
            1 => Some(Self::Average),
            2 => Some(Self::Maximum),
            3 => Some(Self::Occurrences),
            4 => Some(Self::CumulativeSum),
            _ => None,
        }
    }
}

/// Interactive session over the series statistics.
pub struct StockPriceSession<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> StockPriceSession<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(option) = self.read_choice()? else {
                debug!("input closed at stock menu");
                return Ok(());
            };

            let flow = match option {
                StockOption::Quit => break,
                StockOption::Average => self.average()?,
                StockOption::Maximum => self.maximum()?,
                StockOption::Occurrences => self.occurrences()?,
                StockOption::CumulativeSum => self.cumulative_sum()?,
            };
            if flow.is_break() {
                debug!("input closed during stock operation");
                return Ok(());
            }
        }

        let c = &mut self.console;
        c.divider('=')?;
        c.say("You chose to exit the program, bye for now!")?;
        c.divider('=')?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        let c = &mut self.console;
        c.divider('=')?;
        c.say(
            "Enter a numeric value corresponding to the operation that you want to carry out",
        )?;
        c.divider('=')?;
        c.say("1. Calculate the average stock price")?;
        c.say("2. Find the maximum stock price")?;
        c.say("3. Determine the occurrence count of a specific price")?;
        c.say("4. Compute the cumulative sum of stock prices")?;
        c.say("0. Quit the program")?;
        c.divider('=')?;
        Ok(())
    }

    fn read_choice(&mut self) -> anyhow::Result<Option<StockOption>> {
        loop {
            let Some(line) = self.console.ask("Your Choice =>: ")? else {
                return Ok(None);
            };
            let option = line
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(StockOption::from_choice);
            if let Some(option) = option {
                return Ok(Some(option));
            }

            let c = &mut self.console;
            c.divider('=')?;
            c.say(INVALID_CHOICE)?;
            c.divider('=')?;
        }
    }

    fn average(&mut self) -> anyhow::Result<ControlFlow<()>> {
        self.with_series("You chose to calculate the average stock price", |c, series| {
            let average = series.average();
            debug!(len = series.values().len(), average, "computed average");

            c.divider('*')?;
            c.say(format_args!(
                "The Average Price of the entered value(s) to 2 decimal places is == {average:.2}"
            ))?;
            c.divider('*')?;
            Ok(ControlFlow::Continue(()))
        })
    }

    fn maximum(&mut self) -> anyhow::Result<ControlFlow<()>> {
        self.with_series("You chose to find maximum price", |c, series| {
            let maximum = series.maximum();
            debug!(len = series.values().len(), maximum, "computed maximum");

            c.divider('*')?;
            c.say(format_args!(
                "The Maximum Price of the entered value(s) to 2 decimal places is == {maximum:.2}"
            ))?;
            c.divider('*')?;
            Ok(ControlFlow::Continue(()))
        })
    }

    fn occurrences(&mut self) -> anyhow::Result<ControlFlow<()>> {
        self.with_series(
            "You chose to determine the occurrence count of a specific price.",
            |c, series| {
                c.divider('-')?;
                c.say(
                    "Please enter a target stock price whose occurrence you want to check",
                )?;
                c.say("For example: 20.34 Or Enter 0 to discard method")?;
                c.divider('-')?;

                let target = match read_target(c)? {
                    Reply::Value(target) => target,
                    Reply::Cancelled => {
                        back_to_menu(c)?;
                        return Ok(ControlFlow::Continue(()));
                    }
                    Reply::Closed => return Ok(ControlFlow::Break(())),
                };

                let count = series.count_occurrences(target);
                debug!(price = target, count, "counted occurrences");

                c.divider('*')?;
                c.say(format_args!("{target:.2}   Occurred     {count}"))?;
                c.divider('*')?;
                Ok(ControlFlow::Continue(()))
            },
        )
    }

    fn cumulative_sum(&mut self) -> anyhow::Result<ControlFlow<()>> {
        self.with_series(
            "You chose to compute the cumulative sum of stock prices.",
            |c, series| {
                let cumulative = series.cumulative_sum();
                debug!(
                    len = cumulative.len(),
                    total = ?cumulative.total(),
                    "computed cumulative sum"
                );

                c.divider('*')?;
                c.say("Below is the cumulative sum of the stock prices")?;
                c.say(&cumulative)?;
                c.divider('*')?;
                Ok(ControlFlow::Continue(()))
            },
        )
    }

    /// Announce the operation, read a series and hand it to `op`.
    ///
    /// Cancelling returns to the menu; closed input breaks out of the loop.
    fn with_series<F>(&mut self, heading: &str, op: F) -> anyhow::Result<ControlFlow<()>>
    where
        F: FnOnce(&mut Console<R, W>, NumericSeries) -> anyhow::Result<ControlFlow<()>>,
    {
        let c = &mut self.console;
        c.divider('=')?;
        c.say(heading)?;
        print_series_instructions(c)?;

        match read_series(c)? {
            Reply::Value(series) => op(c, series),
            Reply::Cancelled => {
                back_to_menu(c)?;
                Ok(ControlFlow::Continue(()))
            }
            Reply::Closed => Ok(ControlFlow::Break(())),
        }
    }
}

fn print_series_instructions<R: BufRead, W: Write>(c: &mut Console<R, W>) -> anyhow::Result<()> {
    c.divider('=')?;
    c.say("Please enter a series of floats separated by comma.")?;
    c.say("For example:")?;
    c.say("3.00, 3.45, 5.11, 100.01, 100, 20.34")?;
    c.say("Or")?;
    c.say("Enter 0 to quit")?;
    c.divider('=')?;
    Ok(())
}

fn back_to_menu<R: BufRead, W: Write>(c: &mut Console<R, W>) -> anyhow::Result<()> {
    c.divider('=')?;
    c.say("You chose to get back to main menu.")?;
    Ok(())
}

fn read_series<R: BufRead, W: Write>(
    c: &mut Console<R, W>,
) -> anyhow::Result<Reply<NumericSeries>> {
    loop {
        let Some(line) = c.ask("Your series of floats =>: ")? else {
            return Ok(Reply::Closed);
        };
        if line.trim() == CANCEL {
            return Ok(Reply::Cancelled);
        }

        match parse_series(&line) {
            Ok(series) => {
                c.say("All inputs are valid floats")?;
                return Ok(Reply::Value(series));
            }
            Err(err) => {
                debug!(error = %err, "rejected series input");
                c.divider('=')?;
                c.say("The input contains non-float values.")?;
                c.say("Try again or press 0 to quit.")?;
                c.divider('=')?;
            }
        }
    }
}

/// A target that parses to zero doubles as the cancel sentinel.
fn read_target<R: BufRead, W: Write>(c: &mut Console<R, W>) -> anyhow::Result<Reply<f64>> {
    loop {
        let Some(line) = c.ask("Your float =>: ")? else {
            return Ok(Reply::Closed);
        };

        match parse_decimal(&line) {
            Ok(value) if value == 0.0 => return Ok(Reply::Cancelled),
            Ok(value) => {
                c.say("The input is a valid float.")?;
                return Ok(Reply::Value(value));
            }
            Err(err) => {
                debug!(error = %err, "rejected target input");
                c.divider('=')?;
                c.say("The input contains non-float value.")?;
                c.say("Try again or press 0 to quit.")?;
                c.divider('=')?;
            }
        }
    }
}

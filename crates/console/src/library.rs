//! Library catalog menu.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use tallybook_core::DomainError;
use tallybook_library::{Library, Quantity};

use crate::prompt::Console;

const INVALID_OPTION: &str = "Invalid option. Please select a valid option.";

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LibraryOption {
    Exit,
    Add,
    Borrow,
    Return,
}

impl LibraryOption {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            0 => Some(Self::Exit),
            1 => Some(Self::Add),
            2 => Some(Self::Borrow),
            3 => Some(Self::Return),
            _ => None,
        }
    }
}

/// Title, author and quantity collected for one catalog operation.
#[derive(Debug, Clone)]
struct BookRequest {
    title: String,
    author: String,
    quantity: Quantity,
}

/// Interactive session over a [`Library`] owned by the session.
pub struct LibrarySession<R, W> {
    console: Console<R, W>,
    library: Library,
}

impl<R: BufRead, W: Write> LibrarySession<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            library: Library::new(),
        }
    }

    pub fn into_parts(self) -> (Console<R, W>, Library) {
        (self.console, self.library)
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.display_menu()?;

        loop {
            let Some(line) = self.console.read_line()? else {
                debug!("input closed at library menu");
                return Ok(());
            };

            let Ok(choice) = line.trim().parse::<i64>() else {
                self.console.say("Invalid input. Please enter a number.")?;
                self.console.prompt("Your option:=>")?;
                continue;
            };
            let Some(option) = LibraryOption::from_choice(choice) else {
                self.console.say(INVALID_OPTION)?;
                self.display_options()?;
                continue;
            };

            let flow = match option {
                LibraryOption::Exit => break,
                LibraryOption::Add => self.add_books()?,
                LibraryOption::Borrow => self.borrow_books()?,
                LibraryOption::Return => self.return_books()?,
            };
            if flow.is_break() {
                debug!("input closed during library operation");
                return Ok(());
            }

            self.console.blank()?;
            self.display_menu()?;
        }

        self.console.say("You chose to exit. Bye for now!")?;
        Ok(())
    }

    fn display_menu(&mut self) -> anyhow::Result<()> {
        let c = &mut self.console;
        c.divider('=')?;
        c.say("Welcome to UoPeople Demo Library System")?;
        c.say(
            "Please enter any of the corresponding options 1, 2, 3, or 0",
        )?;
        c.say("based on the operation you wish to carry out.")?;
        self.display_options()
    }

    fn display_options(&mut self) -> anyhow::Result<()> {
        let c = &mut self.console;
        c.divider('=')?;
        c.say("1. Add Books")?;
        c.say("2. Borrow Books")?;
        c.say("3. Return Books")?;
        c.say("0. Exit")?;
        c.divider('=')?;
        c.prompt("Your option:=>")?;
        Ok(())
    }

    fn add_books(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(req) = self.read_request("Enter quantity to add:=>")? else {
            return Ok(ControlFlow::Break(()));
        };
        let (c, library) = (&mut self.console, &mut self.library);

        match library.add_stock(&req.title, &req.author, req.quantity) {
            Ok(stocked) => {
                let record = stocked.record();
                info!(
                    book = %record.key(),
                    added = req.quantity.get(),
                    quantity = record.quantity(),
                    "books added"
                );
                if stocked.is_new() {
                    c.say("Book added successfully.")?;
                } else {
                    c.say("Book quantity updated successfully.")?;
                }
                c.say(record)?;
            }
            Err(err) => {
                warn!(error = %err, "add rejected");
                c.say(format_args!("Could not add books: {err}"))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn borrow_books(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(req) = self.read_request("Enter quantity to borrow:=>")? else {
            return Ok(ControlFlow::Break(()));
        };
        let (c, library) = (&mut self.console, &mut self.library);

        match library.borrow(&req.title, &req.author, req.quantity) {
            Ok(record) => {
                info!(
                    book = %record.key(),
                    borrowed = req.quantity.get(),
                    quantity = record.quantity(),
                    "books borrowed"
                );
                c.say("Book borrowed successfully.")?;
                c.say(&record)?;
            }
            Err(DomainError::InsufficientStock {
                available,
                requested,
            }) => {
                warn!(requested, available, "borrow rejected: insufficient stock");
                c.say(format_args!(
                    "Not enough books available. Available quantity: {available}"
                ))?;
            }
            Err(DomainError::NotFound(key)) => {
                warn!(book = %key, "borrow rejected: unknown book");
                c.say("Book not found in the library")?;
            }
            Err(err) => {
                warn!(error = %err, "borrow rejected");
                c.say(format_args!("Could not borrow books: {err}"))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn return_books(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(req) = self.read_request("Enter quantity to return:=>")? else {
            return Ok(ControlFlow::Break(()));
        };
        let (c, library) = (&mut self.console, &mut self.library);

        match library.return_stock(&req.title, &req.author, req.quantity) {
            Ok(record) => {
                info!(
                    book = %record.key(),
                    returned = req.quantity.get(),
                    quantity = record.quantity(),
                    "books returned"
                );
                c.say("Book returned successfully.")?;
                c.say(&record)?;
            }
            Err(DomainError::NotFound(key)) => {
                warn!(book = %key, "return rejected: book is not in the catalog");
                c.say("This book does not belong to our library.")?;
            }
            Err(err) => {
                warn!(error = %err, "return rejected");
                c.say(format_args!("Could not return books: {err}"))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Title and author are taken verbatim; the quantity is re-prompted until
    /// it is a positive whole number. `None` if input ends first.
    fn read_request(&mut self, quantity_prompt: &str) -> anyhow::Result<Option<BookRequest>> {
        let c = &mut self.console;
        let Some(title) = c.ask("Enter title:=>")? else {
            return Ok(None);
        };
        let Some(author) = c.ask("Enter author:=>")? else {
            return Ok(None);
        };

        loop {
            let Some(line) = c.ask(quantity_prompt)? else {
                return Ok(None);
            };
            match line.parse::<Quantity>() {
                Ok(quantity) => {
                    return Ok(Some(BookRequest {
                        title,
                        author,
                        quantity,
                    }));
                }
                Err(DomainError::Parse(_)) => {
                    c.say("Invalid quantity. Please enter a valid number.")?;
                }
                Err(_) => {
                    c.say("Invalid quantity. Please enter a positive number.")?;
                }
            }
        }
    }
}

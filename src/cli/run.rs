use crate::{
    cli::console::Console,
    prelude::{
        AppError,
        command::{Cli, Commands},
        contact::Contact,
        listing_line, PhoneBook,
    },
};
use std::io;
use tracing::debug;

pub fn run_app(cli: Cli) -> Result<(), AppError> {
    debug!(file = %cli.file, save_mode = ?cli.save_mode, "opening phone book");
    let mut book = PhoneBook::new(Some(&cli.file), cli.save_mode)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Console::new(&mut book, stdin.lock(), io::stdout()).run()
        }

        Commands::List { page_size } => {
            if book.is_empty() {
                println!("Phone book is empty.");
                return Ok(());
            }

            for (i, page) in book.list(page_size)?.enumerate() {
                if i > 0 {
                    println!();
                }
                for line in page.lines() {
                    println!("{line}");
                }
            }
            Ok(())
        }

        Commands::Add {
            surname,
            first_name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        } => {
            book.add_contact(Contact::new(
                surname,
                first_name,
                patronymic,
                organization,
                work_phone,
                personal_phone,
            ))?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::Edit {
            index,
            field,
            value,
        } => {
            // Displayed numbers start at 1; errors report them that way too
            book.edit_contact(index.saturating_sub(1), field.id().into(), &value)
                .map_err(|e| match e {
                    AppError::IndexOutOfRange { len, .. } => {
                        AppError::IndexOutOfRange { index, len }
                    }
                    e => e,
                })?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Search { by } => {
            let mut result: Vec<&Contact> = Vec::new();

            for (field, value) in &by {
                result = book.search_field(&result, *field, value);
                if result.is_empty() {
                    break;
                }
            }

            if result.is_empty() {
                println!("No matching contacts found.");
                return Ok(());
            }

            for (i, contact) in result.iter().enumerate() {
                println!("{}", listing_line(i + 1, contact));
            }
            Ok(())
        }
    }
}

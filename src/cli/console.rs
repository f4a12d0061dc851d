use crate::domain::{Command, Contact, Field, PhoneBook, pages::listing_line};
use crate::errors::AppError;
use std::io::{BufRead, Write};

/// Whether the menu loop keeps going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Answer to "which field?" prompts.
enum Choice {
    Field(Field),
    Done,
}

fn parse_choice(input: &str) -> Option<Choice> {
    if input.eq_ignore_ascii_case("n") {
        return Some(Choice::Done);
    }
    let id = input.parse::<i64>().ok()?;
    Field::try_from(id).ok().map(Choice::Field)
}

/// Prints `text` and reads one trimmed line. `None` once input is exhausted.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive menu over any line-oriented input and output.
pub struct Console<'a, R, W> {
    book: &'a mut PhoneBook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(book: &'a mut PhoneBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    /// Runs until the user picks exit or the input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.show_menu()?;

            let Some(action) = self.prompt("Enter the number of your action: ")? else {
                return Ok(());
            };

            let flow = match Command::parse(&action) {
                Ok(Command::ListContacts) => self.list()?,
                Ok(Command::AddContact) => self.add()?,
                Ok(Command::EditContact) => self.edit()?,
                Ok(Command::SearchContacts) => self.search()?,
                Ok(Command::Exit) => Flow::Quit,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        writeln!(self.output, "{:^40}", "Phone book")?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        writeln!(self.output, "1. List contacts")?;
        writeln!(self.output, "2. Add a contact")?;
        writeln!(self.output, "3. Edit a contact")?;
        writeln!(self.output, "4. Search contacts")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    fn show_fields(&mut self) -> Result<(), AppError> {
        for field in Field::ALL {
            writeln!(self.output, "{field}")?;
        }
        Ok(())
    }

    fn report_empty(&mut self) -> Result<bool, AppError> {
        if self.book.is_empty() {
            writeln!(self.output, "Phone book is empty.")?;
            return Ok(true);
        }
        Ok(false)
    }

    fn list(&mut self) -> Result<Flow, AppError> {
        if self.report_empty()? {
            return Ok(Flow::Continue);
        }

        let page_size = self.ask(
            "Enter the number of records per page: ",
            "Enter an integer greater than zero: ",
            |s| s.parse::<usize>().ok().filter(|&n| n > 0),
        )?;
        let Some(page_size) = page_size else {
            return Ok(Flow::Quit);
        };

        let mut pages = self.book.list(Some(page_size))?;
        // Pull one page at a time; the user may stop between them
        while let Some(page) = pages.next() {
            for line in page.lines() {
                writeln!(self.output, "{line}")?;
            }

            if !pages.has_next() {
                break;
            }

            let answer = read_answer(
                &mut self.input,
                &mut self.output,
                "Press Enter for the next page or type \"N\" to stop viewing: ",
            )?;
            match answer {
                None => return Ok(Flow::Quit),
                Some(a) if a.eq_ignore_ascii_case("n") => break,
                Some(_) => {}
            }
        }

        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow, AppError> {
        let mut values: [String; 6] = Default::default();

        for (value, field) in values.iter_mut().zip(Field::ALL) {
            let prompt = format!("Enter {}: ", field.label().to_lowercase());
            let Some(input) = self.prompt(&prompt)? else {
                return Ok(Flow::Quit);
            };
            *value = input;
        }

        self.book.add_contact(Contact::from(values))?;
        writeln!(self.output, "Contact added.")?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow, AppError> {
        if self.report_empty()? {
            return Ok(Flow::Continue);
        }

        for (i, contact) in self.book.contact_list().iter().enumerate() {
            writeln!(self.output, "{}", listing_line(i + 1, contact))?;
        }

        let len = self.book.len();
        let index = self.ask(
            "Enter the number of the record to edit: ",
            "Enter a valid record number: ",
            |s| s.parse::<usize>().ok().filter(|n| (1..=len).contains(n)),
        )?;
        let Some(index) = index else {
            return Ok(Flow::Quit);
        };

        let mut prompt = "Enter the number of the field to edit, or \"N\" to finish: ";
        let mut edited = false;
        loop {
            self.show_fields()?;
            let choice = self.ask(prompt, "Enter one of the listed field numbers: ", parse_choice)?;

            let field = match choice {
                None => return Ok(Flow::Quit),
                Some(Choice::Done) => break,
                Some(Choice::Field(field)) => field,
            };

            let Some(value) = self.prompt("Enter the new value: ")? else {
                return Ok(Flow::Quit);
            };
            self.book.edit_field(index - 1, field, &value)?;

            edited = true;
            prompt = "Enter another field number to edit, or \"N\" to finish: ";
        }

        if edited {
            writeln!(self.output, "Editing finished.")?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, AppError> {
        if self.report_empty()? {
            return Ok(Flow::Continue);
        }

        let mut prompt = "Enter the number of the field to search by, or \"N\" to finish: ";
        let mut criteria: Vec<(Field, String)> = Vec::new();
        loop {
            self.show_fields()?;
            let choice = self.ask(prompt, "Enter one of the listed field numbers: ", parse_choice)?;

            let field = match choice {
                None => return Ok(Flow::Quit),
                Some(Choice::Done) => break,
                Some(Choice::Field(field)) => field,
            };

            let Some(value) = self.prompt("Enter the value to search for: ")? else {
                return Ok(Flow::Quit);
            };
            criteria.push((field, value));

            prompt = "Enter another field number to search by, or \"N\" to finish: ";
        }

        if criteria.is_empty() {
            return Ok(Flow::Continue);
        }

        let mut result: Vec<&Contact> = Vec::new();
        for (field, value) in &criteria {
            result = self.book.search_field(&result, *field, value);
            // An empty result would restart from the whole book on the next criterion
            if result.is_empty() {
                break;
            }
        }

        if result.is_empty() {
            writeln!(self.output, "No matching contacts found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Search results:")?;
        for (i, contact) in result.iter().enumerate() {
            writeln!(self.output, "{}", listing_line(i + 1, contact))?;
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        read_answer(&mut self.input, &mut self.output, text)
    }

    /// Re-prompts with `retry` until `parse` accepts the answer.
    fn ask<T, F>(&mut self, first: &str, retry: &str, parse: F) -> Result<Option<T>, AppError>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut answer = self.prompt(first)?;
        loop {
            let Some(input) = answer else {
                return Ok(None);
            };
            if let Some(value) = parse(&input) {
                return Ok(Some(value));
            }
            answer = self.prompt(retry)?;
        }
    }
}

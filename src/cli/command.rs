use crate::domain::Field;
use crate::errors::AppError;
use crate::storage::{DEFAULT_PATH, SaveMode};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Phone book kept in a plain text file")]
pub struct Cli {
    /// Backing file of the phone book
    #[arg(short, long, env = "PHONEBOOK_FILE", default_value = DEFAULT_PATH)]
    pub file: String,

    /// What saving after an edit does to the backing file
    #[arg(long, value_enum, env = "PHONEBOOK_SAVE_MODE", default_value_t = SaveMode::Append)]
    pub save_mode: SaveMode,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu
    Menu,

    /// Print contacts, optionally in pages
    List {
        /// Records per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Add a new contact. Omitted fields are left empty
    Add {
        #[arg(long, default_value = "")]
        surname: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        patronymic: String,

        #[arg(long, default_value = "")]
        organization: String,

        #[arg(long, default_value = "")]
        work_phone: String,

        #[arg(long, default_value = "")]
        personal_phone: String,
    },

    /// Replace one field of a contact
    Edit {
        /// Record number as shown by `list`
        #[arg(long)]
        index: i64,

        /// Field id (1-6) or name, e.g. `work_phone`
        #[arg(long)]
        field: Field,

        #[arg(long)]
        value: String,
    },

    /// Search contacts; repeated criteria must all match
    Search {
        /// FIELD=VALUE, e.g. `--by surname=ivan --by 4=acme`
        #[arg(long, required = true, value_parser = parse_criterion)]
        by: Vec<(Field, String)>,
    },
}

pub fn parse_criterion(s: &str) -> Result<(Field, String), AppError> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| AppError::Validation(format!("expected FIELD=VALUE, got '{s}'")))?;

    Ok((field.parse()?, value.to_string()))
}

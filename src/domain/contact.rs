use super::*;
use std::fmt;
use std::str::FromStr;

/// Separator between fields, both on disk and in listings.
pub const FIELD_SEPARATOR: &str = ", ";

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    pub surname: String,
    pub first_name: String,
    pub patronymic: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

/// One of the six contact fields, addressed by the ids shown in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Surname = 1,
    FirstName = 2,
    Patronymic = 3,
    Organization = 4,
    WorkPhone = 5,
    PersonalPhone = 6,
}

impl Contact {
    pub fn new(
        surname: String,
        first_name: String,
        patronymic: String,
        organization: String,
        work_phone: String,
        personal_phone: String,
    ) -> Self {
        Contact {
            surname,
            first_name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::FirstName => &self.first_name,
            Field::Patronymic => &self.patronymic,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Surname => &mut self.surname,
            Field::FirstName => &mut self.first_name,
            Field::Patronymic => &mut self.patronymic,
            Field::Organization => &mut self.organization,
            Field::WorkPhone => &mut self.work_phone,
            Field::PersonalPhone => &mut self.personal_phone,
        }
    }

    /// Field values in serialization order.
    pub fn fields(&self) -> [&str; 6] {
        Field::ALL.map(|f| self.field(f))
    }

    /// Case-insensitive substring match against one field.
    pub fn matches(&self, field: Field, needle: &str) -> bool {
        self.field(field)
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl From<[String; 6]> for Contact {
    fn from(values: [String; 6]) -> Self {
        let [
            surname,
            first_name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        ] = values;
        Contact::new(
            surname,
            first_name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join(FIELD_SEPARATOR))
    }
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Surname,
        Field::FirstName,
        Field::Patronymic,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::FirstName => "First name",
            Field::Patronymic => "Patronymic",
            Field::Organization => "Organization",
            Field::WorkPhone => "Work phone",
            Field::PersonalPhone => "Personal phone",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Field::Surname => "surname",
            Field::FirstName => "first_name",
            Field::Patronymic => "patronymic",
            Field::Organization => "organization",
            Field::WorkPhone => "work_phone",
            Field::PersonalPhone => "personal_phone",
        }
    }
}

impl TryFrom<i64> for Field {
    type Error = AppError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Field::Surname),
            2 => Ok(Field::FirstName),
            3 => Ok(Field::Patronymic),
            4 => Ok(Field::Organization),
            5 => Ok(Field::WorkPhone),
            6 => Ok(Field::PersonalPhone),
            _ => Err(AppError::UnknownField(id)),
        }
    }
}

// Accepts a field id ("5") or a field key ("work_phone", "work-phone").
impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Field::try_from(id);
        }

        let key = s.to_lowercase().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| AppError::Validation(format!("Unknown field name '{s}'")))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id(), self.label())
    }
}

use portfolio_contact::ContactSubmission;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission::new(
            self.name.to_owned(),
            self.email.to_owned(),
            self.subject.to_owned(),
            self.message.to_owned(),
        )
    }
}

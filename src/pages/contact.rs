use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill out all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] if any field is empty, else
    /// [`ContactError::InvalidEmail`] if the address is not `local@domain.tld`-shaped.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// One `@`, no whitespace, non-empty local part, and a dot inside the domain with text
/// on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// State of the contact page. Submission is local: the message is logged and the form reset.
#[derive(Debug, Default)]
pub struct ContactPage {
    form: ContactForm,
    submitted: bool,
    error: Option<ContactError>,
}

impl ContactPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editing any field clears the previous confirmation or error.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Subject => self.form.subject = value,
            ContactField::Message => self.form.message = value,
        }
        self.submitted = false;
        self.error = None;
    }

    /// # Errors
    ///
    /// Returns the validation error, which is also kept for display.
    pub fn submit(&mut self) -> Result<(), ContactError> {
        if let Err(e) = self.form.validate() {
            self.error = Some(e);
            return Err(e);
        }
        tracing::info!(
            name = %self.form.name,
            email = %self.form.email,
            subject = %self.form.subject,
            "contact form submitted"
        );
        self.form = ContactForm::default();
        self.submitted = true;
        self.error = None;
        Ok(())
    }

    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    pub const fn submitted(&self) -> bool {
        self.submitted
    }

    pub const fn error(&self) -> Option<ContactError> {
        self.error
    }
}

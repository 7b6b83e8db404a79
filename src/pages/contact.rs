//! Contact page and its form.

use serde::Serialize;

use crate::content::Resolver;
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Where submitted forms go. Delivery is fire-and-forget.
pub trait ContactSubmitter {
    fn submit(&self, submission: &ContactSubmission);
}

/// Only logs the submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitter;

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, submission: &ContactSubmission) {
        log!("contact"; "submission from {} <{}>", submission.name, submission.email);
    }
}

/// Controlled form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactSubmission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Phone => self.values.phone = value,
            Field::Message => self.values.message = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Phone => &self.values.phone,
            Field::Message => &self.values.message,
        }
    }

    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    /// Hand the values to `submitter`, then clear every field.
    pub fn submit(&mut self, submitter: &dyn ContactSubmitter) {
        let submission = std::mem::take(&mut self.values);
        submitter.submit(&submission);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoCard {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub field: Field,
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub title: String,
    pub description: String,
    pub email: InfoCard,
    pub phone: InfoCard,
    pub location: InfoCard,
    pub form_title: String,
    pub fields: Vec<FormField>,
    pub submit_button: String,
    pub map_title: String,
}

impl ContactPage {
    pub fn build(r: &Resolver) -> Self {
        let info = |card: &str, lines: &[&str]| InfoCard {
            title: r.resolve_string(&format!("contactPage.contactInfo.{card}.title")),
            lines: lines
                .iter()
                .map(|line| r.resolve_string(&format!("contactPage.contactInfo.{card}.{line}")))
                .collect(),
        };

        Self {
            title: r.resolve_string("contactPage.hero.title"),
            description: r.resolve_string("contactPage.hero.description"),
            email: info("email", &["primary", "secondary"]),
            phone: info("phone", &["primary", "secondary"]),
            location: info("location", &["company", "address"]),
            form_title: r.resolve_string("contactPage.form.title"),
            fields: Field::ALL
                .iter()
                .map(|&field| {
                    let key = field.key();
                    FormField {
                        field,
                        label: r.resolve_string(&format!("contactPage.form.fields.{key}.label")),
                        placeholder: r
                            .resolve_string(&format!("contactPage.form.fields.{key}.placeholder")),
                    }
                })
                .collect(),
            submit_button: r.resolve_string("contactPage.form.submitButton"),
            map_title: r.resolve_string("contactPage.map.title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Catalog, RecordingSink};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct Outbox(Mutex<Vec<ContactSubmission>>);

    impl ContactSubmitter for Outbox {
        fn submit(&self, submission: &ContactSubmission) {
            self.0.lock().push(submission.clone());
        }
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Ada");
        form.update(Field::Email, "ada@example.com");
        form.update(Field::Message, "Need a quote");
        assert_eq!(form.value(Field::Name), "Ada");

        let outbox = Outbox::default();
        form.submit(&outbox);

        let sent = outbox.0.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "ada@example.com");
        assert_eq!(sent[0].phone, "");
        assert_eq!(form.values(), &ContactSubmission::default());
    }

    #[test]
    fn test_empty_submit_still_resets() {
        let mut form = ContactForm::new();
        form.submit(&LogSubmitter);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_bundled_contact_page() {
        let sink = Arc::new(RecordingSink::new());
        let r = Resolver::new(Arc::new(Catalog::bundled().unwrap()), sink.clone());

        let page = ContactPage::build(&r);
        assert_eq!(page.fields.len(), 4);
        assert_eq!(page.location.lines.len(), 2);
        assert_eq!(page.map_title, "Find us");
        assert!(sink.is_empty(), "{:?}", sink.misses());
    }
}

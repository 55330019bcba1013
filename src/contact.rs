//! Contact form validation and `mailto:` link generation.
//!
//! Nothing is sent from the page: a valid draft becomes a link that hands the
//! message to the visitor's own mail client.

use thiserror::Error;

use crate::config::ContactConfig;
use crate::notice::Notice;

pub const FORM_ID: &str = "contact-form";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Location,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Location, Self::Email, Self::Message];

    /// The `name` attribute of the form control.
    pub fn name(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{}` is empty", .0.name())]
    MissingField(Field),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub location: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(location: &str, email: &str, message: &str) -> Self {
        Self {
            location: location.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Location => &self.location,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Presence check only; the email address format is not inspected.
    pub fn validate(&self) -> Result<(), ContactError> {
        match Field::ALL.into_iter().find(|field| self.value(*field).is_empty()) {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn body(&self) -> String {
        [
            format!("Lokasi: {}", self.location),
            format!("Email pengirim: {}", self.email),
            String::new(),
            "Pesan:".to_string(),
            self.message.clone(),
        ]
        .join("\n")
    }

    pub fn mailto(&self, config: &ContactConfig) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            config.recipient,
            urlencoding::encode(&config.subject),
            urlencoding::encode(&self.body()),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected { error: ContactError, notice: Notice },
    OpenMailClient { link: String, notice: Notice },
}

pub fn submit(draft: &ContactDraft, config: &ContactConfig) -> SubmitOutcome {
    match draft.validate() {
        Err(error) => SubmitOutcome::Rejected {
            error,
            notice: Notice::MISSING_FIELDS,
        },
        Ok(()) => SubmitOutcome::OpenMailClient {
            link: draft.mailto(config),
            notice: Notice::MAIL_CLIENT_OPENING,
        },
    }
}

pub fn reset() -> Notice {
    Notice::FORM_RESET
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Tone;
    use pretty_assertions::assert_eq;

    fn query_param<'a>(link: &'a str, key: &str) -> &'a str {
        let (_, query) = link.split_once('?').expect("link has a query");
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
            .expect("query parameter present")
    }

    #[test]
    fn fields_are_trimmed() {
        let draft = ContactDraft::new("  Jakarta ", "\ta@b.com\n", " Hi ");
        assert_eq!(draft, ContactDraft::new("Jakarta", "a@b.com", "Hi"));
    }

    #[test]
    fn any_blank_field_is_rejected_without_a_link() {
        let config = ContactConfig::default();
        let cases = [
            (ContactDraft::new("", "a@b.com", "Hi"), Field::Location),
            (ContactDraft::new("Jakarta", "   ", "Hi"), Field::Email),
            (ContactDraft::new("Jakarta", "a@b.com", "\n"), Field::Message),
        ];

        for (draft, field) in cases {
            let outcome = submit(&draft, &config);
            assert_eq!(
                outcome,
                SubmitOutcome::Rejected {
                    error: ContactError::MissingField(field),
                    notice: Notice::MISSING_FIELDS,
                }
            );
        }
    }

    #[test]
    fn email_format_is_not_checked() {
        assert_eq!(ContactDraft::new("x", "not an email", "y").validate(), Ok(()));
    }

    #[test]
    fn populated_draft_opens_mail_client_with_labeled_body() {
        let config = ContactConfig::default();
        let draft = ContactDraft::new("Jakarta", "a@b.com", "Hi");

        let SubmitOutcome::OpenMailClient { link, notice } = submit(&draft, &config) else {
            panic!("populated draft should be accepted");
        };

        assert!(link.starts_with("mailto:hello@example.com?subject="));
        assert_eq!(notice.tone, Tone::Success);
        assert_eq!(notice, Notice::MAIL_CLIENT_OPENING);

        let body = urlencoding::decode(query_param(&link, "body")).expect("valid utf-8");
        assert_eq!(body, "Lokasi: Jakarta\nEmail pengirim: a@b.com\n\nPesan:\nHi");

        let subject = urlencoding::decode(query_param(&link, "subject")).expect("valid utf-8");
        assert_eq!(subject, "Pesan dari Portofolio — Kolaborasi");
    }

    #[test]
    fn reserved_characters_in_the_message_are_escaped() {
        let draft = ContactDraft::new("A&B", "a@b.com", "x=1?y#z");
        let link = draft.mailto(&ContactConfig::default());

        let (_, query) = link.split_once('?').expect("link has a query");
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(query.matches('=').count(), 2);
        assert!(!query.contains('#'));
    }

    #[test]
    fn reset_always_shows_the_neutral_notice() {
        assert_eq!(reset(), Notice::FORM_RESET);
        assert_eq!(reset().tone, Tone::Neutral);
    }

    #[test]
    fn missing_field_error_names_the_control() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "required field `email` is empty"
        );
    }
}

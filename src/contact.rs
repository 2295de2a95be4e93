use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    EmptyField(Field),
    #[error("\"{0}\" doesn't look like an email address")]
    InvalidEmail(String),
    #[error("Couldn't send the message: {0}")]
    Delivery(String),
}

/// A contact form submission. Also the shape of the saved draft, so a
/// failed hand-off can be retried without retyping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::EmptyField(field));
            }
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Message from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "{}\r\n\r\nReply to: {}",
            self.message.trim(),
            self.email.trim()
        )
    }

    /// `mailto:` link that opens the visitor's mail client with everything
    /// filled in.
    pub fn mailto_uri(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Loved the particles & the glitch!".to_string(),
        }
    }

    #[test]
    fn test_mailto_uri() {
        let uri = message().mailto_uri("hello@example.com").unwrap();
        assert_eq!(
            uri,
            "mailto:hello@example.com?subject=Message%20from%20Ada%20Lovelace\
             &body=Loved%20the%20particles%20%26%20the%20glitch%21%0D%0A%0D%0AReply%20to%3A%20ada%40example.com"
        );
    }

    #[test]
    fn test_empty_fields() {
        let mut m = message();
        m.name = "  ".to_string();
        assert_eq!(m.validate(), Err(ContactError::EmptyField(Field::Name)));
        let mut m = message();
        m.message.clear();
        assert_eq!(
            m.mailto_uri("x@y.z"),
            Err(ContactError::EmptyField(Field::Message))
        );
        assert!(ContactMessage::default().is_empty());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@mail.example.org"));
        assert!(!is_email("no-at-sign.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@localhost"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("a b@c.com"));
        let mut m = message();
        m.email = "nope".to_string();
        assert_eq!(
            m.validate(),
            Err(ContactError::InvalidEmail("nope".to_string()))
        );
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Bookable treatments, in the order the booking form lists them.
pub const SERVICES: [&str; 4] = [
    "Natuurlijke Look",
    "Lash extensions",
    "Lash Lift",
    "Brows & Lashes",
];

pub const DEFAULT_SERVICE: &str = "Lash extensions";

pub fn is_known_service(name: &str) -> bool {
    SERVICES.contains(&name)
}

/// Service preselected when the modal opens. Unknown names fall back to the default.
pub fn preselected_service(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|name| SERVICES.iter().find(|s| **s == name))
        .copied()
        .unwrap_or(DEFAULT_SERVICE)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("booking rejected: {0}")]
    Rejected(String),
}

impl BookingError {
    /// Message shown inside the modal.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::MissingField("name") => "Vul uw naam in.".to_string(),
            BookingError::MissingField("phone") => "Vul uw telefoonnummer in.".to_string(),
            BookingError::MissingField(field) => format!("Vul het veld '{}' in.", field),
            BookingError::UnknownService(_) => "Kies een geldige behandeling.".to_string(),
            BookingError::InvalidDate(_) => "Kies een geldige datum.".to_string(),
            BookingError::Rejected(_) => {
                "Uw aanvraag kon niet worden verzonden. Probeer het later opnieuw.".to_string()
            }
        }
    }
}

/// A validated reservation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRecord {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
}

/// Raw values as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
}

impl BookingForm {
    /// Checks the entered values and hands them on exactly as typed.
    ///
    /// Only values the form controls cannot produce on their own are rejected:
    /// blank required fields, a service outside the catalogue, a malformed date.
    pub fn validate(&self) -> Result<BookingRecord, BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(BookingError::MissingField("phone"));
        }
        if !is_known_service(&self.service) {
            return Err(BookingError::UnknownService(self.service.clone()));
        }
        if !self.date.is_empty() && NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(BookingError::InvalidDate(self.date.clone()));
        }

        Ok(BookingRecord {
            name: self.name.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            date: self.date.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingForm {
        BookingForm {
            name: "Sara Peeters".to_string(),
            phone: "+32 470 12 34 56".to_string(),
            service: "Lash Lift".to_string(),
            date: "2026-11-03".to_string(),
        }
    }

    #[test]
    fn complete_form_passes_values_through() {
        let record = filled().validate().unwrap();
        assert_eq!(
            record,
            BookingRecord {
                name: "Sara Peeters".to_string(),
                phone: "+32 470 12 34 56".to_string(),
                service: "Lash Lift".to_string(),
                date: "2026-11-03".to_string(),
            }
        );
    }

    #[test]
    fn name_and_phone_are_required() {
        let form = BookingForm { name: "   ".to_string(), ..filled() };
        assert_eq!(form.validate(), Err(BookingError::MissingField("name")));

        let form = BookingForm { phone: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(BookingError::MissingField("phone")));
    }

    #[test]
    fn date_is_optional_but_must_be_a_real_day() {
        let form = BookingForm { date: String::new(), ..filled() };
        assert_eq!(form.validate().unwrap().date, "");

        let form = BookingForm { date: "2026-02-30".to_string(), ..filled() };
        assert!(matches!(form.validate(), Err(BookingError::InvalidDate(_))));
    }

    #[test]
    fn entered_values_are_kept_verbatim() {
        let form = BookingForm {
            name: " Sara ".to_string(),
            phone: "0470 11 22 33 ".to_string(),
            ..filled()
        };
        let record = form.validate().unwrap();
        assert_eq!(record.name, " Sara ");
        assert_eq!(record.phone, "0470 11 22 33 ");
    }

    #[test]
    fn service_must_come_from_the_catalogue() {
        let form = BookingForm { service: "Botox".to_string(), ..filled() };
        assert_eq!(form.validate(), Err(BookingError::UnknownService("Botox".to_string())));

        let form = BookingForm { service: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(BookingError::UnknownService(String::new())));

        let form = BookingForm { service: " Lash Lift".to_string(), ..filled() };
        assert!(form.validate().is_err());
    }

    #[test]
    fn preselection_falls_back_to_default() {
        assert_eq!(preselected_service(Some("Lash Lift")), "Lash Lift");
        assert_eq!(preselected_service(Some("Mega Volume")), DEFAULT_SERVICE);
        assert_eq!(preselected_service(None), DEFAULT_SERVICE);
    }

    #[test]
    fn record_serializes_with_form_field_names() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["name"], "Sara Peeters");
        assert_eq!(json["service"], "Lash Lift");
        assert_eq!(json["date"], "2026-11-03");
    }
}

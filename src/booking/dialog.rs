use std::rc::Rc;

use crate::booking::models::{preselected_service, BookingError, BookingForm, BookingRecord};

/// Receives validated reservation requests.
#[cfg_attr(test, mockall::automock)]
pub trait BookingHandler {
    fn submit(&self, record: &BookingRecord) -> Result<(), BookingError>;
}

/// Logs the request. There is no reservation backend behind the site.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleBookingHandler;

impl BookingHandler for ConsoleBookingHandler {
    fn submit(&self, record: &BookingRecord) -> Result<(), BookingError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| BookingError::Rejected(e.to_string()))?;
        log::info!("Reservering verzonden: {}", payload);
        Ok(())
    }
}

/// Shared handle to a handler, comparable by identity so it can travel in props.
#[derive(Clone)]
pub struct HandlerRef(pub Rc<dyn BookingHandler>);

impl HandlerRef {
    pub fn new<H: BookingHandler + 'static>(handler: H) -> Self {
        Self(Rc::new(handler))
    }
}

impl Default for HandlerRef {
    fn default() -> Self {
        Self::new(ConsoleBookingHandler)
    }
}

impl PartialEq for HandlerRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Open/closed state of the booking modal and the service it opened with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDialog {
    open: bool,
    service: Option<String>,
    last_error: Option<BookingError>,
}

impl BookingDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn default_service(&self) -> &'static str {
        preselected_service(self.service.as_deref())
    }

    pub fn last_error(&self) -> Option<&BookingError> {
        self.last_error.as_ref()
    }

    pub fn open(&mut self, service: Option<&str>) {
        log::debug!("Opening booking dialog for {:?}", service);
        self.open = true;
        self.service = service.map(str::to_string);
        self.last_error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.last_error = None;
    }

    /// Validates and hands the form to `handler`. Closes only when the handler accepts it.
    pub fn submit(
        &mut self,
        form: &BookingForm,
        handler: &dyn BookingHandler,
    ) -> Result<BookingRecord, BookingError> {
        let outcome = form.validate().and_then(|record| {
            handler.submit(&record)?;
            Ok(record)
        });
        match &outcome {
            Ok(record) => {
                log::info!("Booking accepted for {}", record.service);
                self.close();
            }
            Err(e) => {
                log::warn!("Booking not sent: {}", e);
                self.last_error = Some(e.clone());
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn form() -> BookingForm {
        BookingForm {
            name: "Lotte".to_string(),
            phone: "0470 11 22 33".to_string(),
            service: "Brows & Lashes".to_string(),
            date: "2026-12-01".to_string(),
        }
    }

    #[test]
    fn accepted_booking_reaches_handler_and_closes() {
        let expected = BookingRecord {
            name: "Lotte".to_string(),
            phone: "0470 11 22 33".to_string(),
            service: "Brows & Lashes".to_string(),
            date: "2026-12-01".to_string(),
        };
        let mut handler = MockBookingHandler::new();
        handler
            .expect_submit()
            .with(eq(expected.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let mut dialog = BookingDialog::default();
        dialog.open(Some("Brows & Lashes"));
        let record = dialog.submit(&form(), &handler).unwrap();

        assert_eq!(record, expected);
        assert!(!dialog.is_open());
        assert!(dialog.last_error().is_none());
    }

    #[test]
    fn handler_sees_values_as_typed() {
        let typed = BookingForm {
            name: " Sara ".to_string(),
            phone: "0470 11 22 33 ".to_string(),
            ..form()
        };
        let expected = BookingRecord {
            name: " Sara ".to_string(),
            phone: "0470 11 22 33 ".to_string(),
            service: "Brows & Lashes".to_string(),
            date: "2026-12-01".to_string(),
        };
        let mut handler = MockBookingHandler::new();
        handler
            .expect_submit()
            .with(eq(expected.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let mut dialog = BookingDialog::default();
        dialog.open(None);
        assert_eq!(dialog.submit(&typed, &handler), Ok(expected));
    }

    #[test]
    fn invalid_form_never_reaches_handler() {
        let mut handler = MockBookingHandler::new();
        handler.expect_submit().times(0);

        let mut dialog = BookingDialog::default();
        dialog.open(None);
        let form = BookingForm { name: String::new(), ..form() };
        assert_eq!(
            dialog.submit(&form, &handler),
            Err(BookingError::MissingField("name"))
        );
        assert!(dialog.is_open());
        assert_eq!(dialog.last_error(), Some(&BookingError::MissingField("name")));
    }

    #[test]
    fn handler_failure_keeps_dialog_open() {
        let mut handler = MockBookingHandler::new();
        handler
            .expect_submit()
            .times(1)
            .returning(|_| Err(BookingError::Rejected("offline".to_string())));

        let mut dialog = BookingDialog::default();
        dialog.open(Some("Lash Lift"));
        assert!(dialog.submit(&form(), &handler).is_err());
        assert!(dialog.is_open());
        assert!(matches!(dialog.last_error(), Some(BookingError::Rejected(_))));
    }

    #[test]
    fn reopening_clears_previous_error_and_service() {
        let mut dialog = BookingDialog::default();
        dialog.open(Some("Lash Lift"));
        let _ = dialog.submit(&BookingForm::default(), &ConsoleBookingHandler);
        assert!(dialog.last_error().is_some());

        dialog.close();
        dialog.open(None);
        assert!(dialog.last_error().is_none());
        assert_eq!(dialog.default_service(), "Lash extensions");
    }

    #[test]
    fn handler_refs_compare_by_identity() {
        let handler = HandlerRef::default();
        assert!(handler == handler.clone());
        assert!(handler != HandlerRef::default());
    }

    #[test]
    fn console_handler_accepts_valid_records() {
        let record = form().validate().unwrap();
        assert_eq!(ConsoleBookingHandler.submit(&record), Ok(()));
    }
}

//! State machine for the edit/create form pages.

use super::{Notification, Severity};

/// Navigation the page must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    NavigateToList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    pub record: T,
    pub loading: bool,
    pub notification: Notification,
    pub confirm_leave_open: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone)]
pub enum FormEvent<T> {
    /// A field was edited, producing the given record.
    FieldChanged(T),
    /// A load or save request went out.
    RequestStarted,
    /// The record arrived from the server for editing.
    LoadFinished(T),
    /// The save round-trip finished.
    SaveFinished,
    /// A load or save request failed with the given message.
    RequestFailed(String),
    NotificationClosed,
    /// The user asked to go back to the listing.
    BackRequested,
    /// The leave-confirmation dialog was answered.
    LeaveConfirmed(bool),
}

impl<T> FormState<T> {
    pub fn new(record: T) -> Self {
        Self {
            record,
            loading: false,
            notification: Notification::hidden(),
            confirm_leave_open: false,
            dirty: false,
        }
    }

    /// Applies one user or network event. Closing a success notification
    /// navigates back to the listing; closing an error one stays on the
    /// form. Leaving a dirty form requires confirmation.
    pub fn apply(&mut self, event: FormEvent<T>) -> Option<FormEffect> {
        match event {
            FormEvent::FieldChanged(record) => {
                self.record = record;
                self.dirty = true;
                None
            }
            FormEvent::RequestStarted => {
                self.loading = true;
                None
            }
            FormEvent::LoadFinished(record) => {
                self.loading = false;
                self.record = record;
                None
            }
            FormEvent::SaveFinished => {
                self.loading = false;
                self.notification = Notification::success("Record saved.");
                None
            }
            FormEvent::RequestFailed(message) => {
                self.loading = false;
                self.notification = Notification::error(format!("ERROR: {message}"));
                None
            }
            FormEvent::NotificationClosed => {
                let saved = self.notification.show && self.notification.severity == Severity::Success;
                self.notification = Notification::hidden();
                saved.then_some(FormEffect::NavigateToList)
            }
            FormEvent::BackRequested => {
                if self.dirty {
                    self.confirm_leave_open = true;
                    None
                } else {
                    Some(FormEffect::NavigateToList)
                }
            }
            FormEvent::LeaveConfirmed(answer) => {
                self.confirm_leave_open = false;
                answer.then_some(FormEffect::NavigateToList)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_form() -> FormState<String> {
        FormState::new(String::new())
    }

    #[test]
    fn editing_a_field_marks_the_form_dirty() {
        let mut form = new_form();
        assert!(!form.dirty);
        assert_eq!(form.apply(FormEvent::FieldChanged("Fiat".into())), None);
        assert!(form.dirty);
        assert_eq!(form.record, "Fiat");
    }

    #[test]
    fn save_round_trip_shows_success_then_navigates_on_close() {
        let mut form = new_form();
        form.apply(FormEvent::FieldChanged("Fiat".into()));
        form.apply(FormEvent::RequestStarted);
        assert!(form.loading);

        form.apply(FormEvent::SaveFinished);
        assert!(!form.loading);
        assert_eq!(form.notification.severity, Severity::Success);

        assert_eq!(
            form.apply(FormEvent::NotificationClosed),
            Some(FormEffect::NavigateToList)
        );
        assert!(!form.notification.show);
    }

    #[test]
    fn failed_save_shows_error_and_stays_on_the_form() {
        let mut form = new_form();
        form.apply(FormEvent::RequestStarted);
        form.apply(FormEvent::RequestFailed("HTTP 422".into()));
        assert!(!form.loading);
        assert_eq!(form.notification.severity, Severity::Error);
        assert!(form.notification.message.contains("HTTP 422"));

        assert_eq!(form.apply(FormEvent::NotificationClosed), None);
    }

    #[test]
    fn leaving_a_clean_form_navigates_immediately() {
        let mut form = new_form();
        assert_eq!(
            form.apply(FormEvent::BackRequested),
            Some(FormEffect::NavigateToList)
        );
        assert!(!form.confirm_leave_open);
    }

    #[test]
    fn leaving_a_dirty_form_asks_for_confirmation() {
        let mut form = new_form();
        form.apply(FormEvent::FieldChanged("Fiat".into()));

        assert_eq!(form.apply(FormEvent::BackRequested), None);
        assert!(form.confirm_leave_open);

        assert_eq!(form.apply(FormEvent::LeaveConfirmed(false)), None);
        assert!(!form.confirm_leave_open);

        form.apply(FormEvent::BackRequested);
        assert_eq!(
            form.apply(FormEvent::LeaveConfirmed(true)),
            Some(FormEffect::NavigateToList)
        );
    }

    #[test]
    fn loading_an_existing_record_does_not_mark_the_form_dirty() {
        let mut form = new_form();
        form.apply(FormEvent::RequestStarted);
        form.apply(FormEvent::LoadFinished("Fiat".into()));
        assert!(!form.loading);
        assert!(!form.dirty);
        assert_eq!(form.record, "Fiat");
    }
}

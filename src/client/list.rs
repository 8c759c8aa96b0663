//! State machine for the listing pages with their delete-confirmation flow.

use super::Notification;

/// Follow-up action the page must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEffect {
    /// Issue the delete request for this row.
    Delete(i64),
    /// Reload the listing from the server.
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub notification: Notification,
    pub confirm_delete_open: bool,
    pub delete_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub enum ListEvent<T> {
    LoadStarted,
    LoadFinished(Vec<T>),
    LoadFailed(String),
    /// The delete button of the given row was clicked.
    DeleteRequested(i64),
    /// The delete-confirmation dialog was answered.
    DeleteConfirmed(bool),
    DeleteFinished,
    DeleteFailed(String),
    NotificationClosed,
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            notification: Notification::hidden(),
            confirm_delete_open: false,
            delete_id: None,
        }
    }

    /// Applies one user or network event. A confirmed delete yields the
    /// delete effect; a finished delete yields a reload, and the success
    /// banner it sets survives that reload.
    pub fn apply(&mut self, event: ListEvent<T>) -> Option<ListEffect> {
        match event {
            ListEvent::LoadStarted => {
                self.loading = true;
                self.confirm_delete_open = false;
                None
            }
            ListEvent::LoadFinished(rows) => {
                self.loading = false;
                self.rows = rows;
                None
            }
            ListEvent::LoadFailed(message) => {
                self.loading = false;
                self.notification = Notification::error(format!("ERROR: {message}"));
                None
            }
            ListEvent::DeleteRequested(id) => {
                self.delete_id = Some(id);
                self.confirm_delete_open = true;
                None
            }
            ListEvent::DeleteConfirmed(answer) => {
                self.confirm_delete_open = false;
                if !answer {
                    self.delete_id = None;
                    return None;
                }
                self.delete_id.take().map(|id| {
                    self.loading = true;
                    ListEffect::Delete(id)
                })
            }
            ListEvent::DeleteFinished => {
                self.notification = Notification::success("Record deleted.");
                Some(ListEffect::Reload)
            }
            ListEvent::DeleteFailed(message) => {
                self.loading = false;
                self.notification = Notification::error(format!("ERROR: {message}"));
                None
            }
            ListEvent::NotificationClosed => {
                self.notification = Notification::hidden();
                None
            }
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Severity;

    fn loaded_list() -> ListState<&'static str> {
        let mut list = ListState::new();
        list.apply(ListEvent::LoadStarted);
        list.apply(ListEvent::LoadFinished(vec!["Uno", "Ka"]));
        list
    }

    #[test]
    fn load_cycle_populates_rows() {
        let list = loaded_list();
        assert!(!list.loading);
        assert_eq!(list.rows, vec!["Uno", "Ka"]);
        assert!(!list.notification.show);
    }

    #[test]
    fn failed_load_shows_an_error() {
        let mut list: ListState<&str> = ListState::new();
        list.apply(ListEvent::LoadStarted);
        list.apply(ListEvent::LoadFailed("connection refused".into()));
        assert!(!list.loading);
        assert_eq!(list.notification.severity, Severity::Error);
    }

    #[test]
    fn delete_needs_confirmation_before_any_effect() {
        let mut list = loaded_list();
        assert_eq!(list.apply(ListEvent::DeleteRequested(7)), None);
        assert!(list.confirm_delete_open);
        assert_eq!(list.delete_id, Some(7));
    }

    #[test]
    fn cancelling_the_dialog_drops_the_pending_delete() {
        let mut list = loaded_list();
        list.apply(ListEvent::DeleteRequested(7));
        assert_eq!(list.apply(ListEvent::DeleteConfirmed(false)), None);
        assert!(!list.confirm_delete_open);
        assert_eq!(list.delete_id, None);
    }

    #[test]
    fn confirming_the_dialog_fires_the_delete() {
        let mut list = loaded_list();
        list.apply(ListEvent::DeleteRequested(7));
        assert_eq!(
            list.apply(ListEvent::DeleteConfirmed(true)),
            Some(ListEffect::Delete(7))
        );
        assert!(list.loading);
        assert_eq!(list.delete_id, None);
    }

    #[test]
    fn finished_delete_reloads_and_keeps_the_success_banner() {
        let mut list = loaded_list();
        list.apply(ListEvent::DeleteRequested(7));
        list.apply(ListEvent::DeleteConfirmed(true));

        assert_eq!(list.apply(ListEvent::DeleteFinished), Some(ListEffect::Reload));
        assert_eq!(list.notification.severity, Severity::Success);

        list.apply(ListEvent::LoadStarted);
        list.apply(ListEvent::LoadFinished(vec!["Uno"]));
        assert!(list.notification.show);
    }

    #[test]
    fn failed_delete_shows_an_error_and_does_not_reload() {
        let mut list = loaded_list();
        list.apply(ListEvent::DeleteRequested(7));
        list.apply(ListEvent::DeleteConfirmed(true));
        assert_eq!(list.apply(ListEvent::DeleteFailed("HTTP 500".into())), None);
        assert!(!list.loading);
        assert_eq!(list.notification.severity, Severity::Error);
    }

    #[test]
    fn confirming_without_a_pending_delete_is_a_no_op() {
        let mut list = loaded_list();
        assert_eq!(list.apply(ListEvent::DeleteConfirmed(true)), None);
        assert!(!list.loading);
    }
}

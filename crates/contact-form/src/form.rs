//! Form state: the selected record and the draft being edited.

use tracing::debug;

use crate::actions::{ActionError, ContactActions};
use crate::draft::{ContactRecord, Draft, DraftError, Field};

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// Add mode stored a new contact.
    Created(ContactRecord),
    /// Edit mode overwrote the selected contact.
    Updated(ContactRecord),
}

/// Create/edit form for a single contact.
///
/// With no record selected the form is in add mode; selecting a record
/// switches it to edit mode and loads the record into the draft.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    current: Option<ContactRecord>,
    draft: Draft,
}

impl ContactForm {
    /// Empty form in add mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection.
    ///
    /// `Some` loads the record into the draft wholesale; `None` resets the
    /// draft to defaults.
    pub fn select(&mut self, current: Option<ContactRecord>) {
        self.draft = current.as_ref().map(Draft::from).unwrap_or_default();
        self.current = current;
    }

    /// Record currently being edited.
    pub fn current(&self) -> Option<&ContactRecord> {
        self.current.as_ref()
    }

    /// Draft holding the current input values.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Update one draft field.
    ///
    /// # Errors
    /// See [`Draft::set`].
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> Result<(), DraftError> {
        self.draft.set(field, value)
    }

    /// Update the draft field named by a form input.
    ///
    /// # Errors
    /// [`DraftError::UnknownField`] for names other than `name`, `email`,
    /// `phone` and `type`.
    pub fn change_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), DraftError> {
        let field = name.parse()?;
        self.change(field, value)
    }

    /// Persist the draft: create in add mode, update in edit mode.
    ///
    /// On success the selection is cleared and the draft reset. On failure
    /// both are kept so the submit can be retried.
    ///
    /// # Errors
    /// Whatever the dispatched action reports.
    pub async fn submit<A>(&mut self, actions: &A) -> Result<Submitted, ActionError>
    where
        A: ContactActions + ?Sized,
    {
        let outcome = match &self.current {
            None => actions.add_contact(&self.draft).await.map(Submitted::Created),
            Some(current) => actions
                .update_contact(&current.id, &self.draft)
                .await
                .map(Submitted::Updated),
        };
        match outcome {
            Ok(submitted) => {
                self.select(None);
                Ok(submitted)
            }
            Err(err) => {
                debug!(error = %err, "contact submit failed; draft kept");
                Err(err)
            }
        }
    }

    /// Drop the selection without persisting.
    pub fn clear(&mut self) {
        self.select(None);
    }

    /// Whether an existing contact is selected.
    pub fn is_editing(&self) -> bool {
        self.current.is_some()
    }

    /// Form title for the current mode.
    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Contact"
        } else {
            "Add Contact"
        }
    }

    /// Submit button label for the current mode.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Contact"
        } else {
            "Add Contact"
        }
    }

    /// The clear button only shows while editing.
    pub fn show_clear(&self) -> bool {
        self.is_editing()
    }
}

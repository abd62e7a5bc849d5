//! Draft-state editor for building budgets one client visit at a time.
//!
//! The editor owns the form fields, the in-progress service list, and the
//! finalized budget collection; its methods are the only write path. Edit
//! cursors hold the stable id of the entry being edited rather than its
//! position, so removing an unrelated entry never leaves a cursor pointing
//! at the wrong row.

use uuid::Uuid;

use crate::budget::{Budget, Service};
use crate::errors::EditorError;
use crate::money::{fixed_price_for, Amount};

/// Mutation categories reported to the change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    DraftChanged,
    ServiceListChanged,
    BudgetListChanged,
}

pub type ChangeListener = Box<dyn FnMut(EditorEvent) + Send>;

#[derive(Default)]
pub struct BudgetEditor {
    client_name: String,
    visit_date: String,
    service_name: String,
    amount_input: String,
    draft_services: Vec<Service>,
    budgets: Vec<Budget>,
    service_cursor: Option<Uuid>,
    budget_cursor: Option<Uuid>,
    listener: Option<ChangeListener>,
}

impl BudgetEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook invoked after every successful mutation.
    pub fn set_change_listener(&mut self, listener: ChangeListener) {
        self.listener = Some(listener);
    }

    fn notify(&mut self, event: EditorEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
    }

    // Form fields.

    pub fn set_client_name(&mut self, value: impl Into<String>) {
        self.client_name = value.into();
        self.notify(EditorEvent::DraftChanged);
    }

    pub fn set_visit_date(&mut self, value: impl Into<String>) {
        self.visit_date = value.into();
        self.notify(EditorEvent::DraftChanged);
    }

    pub fn set_service_name(&mut self, value: impl Into<String>) {
        self.service_name = value.into();
        self.notify(EditorEvent::DraftChanged);
    }

    pub fn set_amount_input(&mut self, value: impl Into<String>) {
        self.amount_input = value.into();
        self.notify(EditorEvent::DraftChanged);
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn visit_date(&self) -> &str {
        &self.visit_date
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn draft_services(&self) -> &[Service] {
        &self.draft_services
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Current position of the service being edited, if any.
    pub fn service_edit_pending(&self) -> Option<usize> {
        self.service_cursor
            .and_then(|id| self.draft_services.iter().position(|s| s.id == id))
    }

    /// Current position of the budget being edited, if any.
    pub fn budget_edit_pending(&self) -> Option<usize> {
        self.budget_cursor
            .and_then(|id| self.budgets.iter().position(|b| b.id == id))
    }

    /// Appends a service from the name/amount fields, or replaces the one
    /// under the service cursor when an edit is pending.
    ///
    /// Names matching a fixed-price keyword take their fixed amount and the
    /// amount field is ignored (it may be empty). On success the name and
    /// amount fields clear; on failure nothing changes.
    pub fn add_or_save_service(&mut self) -> Result<(), EditorError> {
        let name = self.service_name.trim().to_string();
        let amount_raw = self.amount_input.trim().to_string();
        let fixed = fixed_price_for(&name);

        if name.is_empty() || (amount_raw.is_empty() && fixed.is_none()) {
            return Err(EditorError::MissingServiceFields);
        }
        let amount = match fixed {
            Some(price) => price,
            None => Amount::parse(&amount_raw)?,
        };

        let service = Service::new(name, amount);
        let replaced = self
            .service_cursor
            .take()
            .and_then(|id| self.draft_services.iter().position(|s| s.id == id));
        match replaced {
            Some(position) => {
                tracing::debug!(position, "replacing draft service");
                self.draft_services[position] = service;
            }
            None => self.draft_services.push(service),
        }

        self.service_name.clear();
        self.amount_input.clear();
        self.notify(EditorEvent::ServiceListChanged);
        Ok(())
    }

    /// Loads the service at `index` into the input fields and marks it as
    /// the edit target. The list itself is untouched.
    pub fn edit_service(&mut self, index: usize) -> Result<(), EditorError> {
        let service = self
            .draft_services
            .get(index)
            .ok_or(EditorError::NoSuchEntry(index))?;
        self.service_name = service.name.clone();
        self.amount_input = service.amount.to_string();
        self.service_cursor = Some(service.id);
        self.notify(EditorEvent::DraftChanged);
        Ok(())
    }

    /// Removes the service at `index`. Removing the entry under the cursor
    /// cancels the pending edit and clears the input fields; removing any
    /// other entry leaves the pending edit intact.
    pub fn remove_service(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.draft_services.len() {
            return Err(EditorError::NoSuchEntry(index));
        }
        let removed = self.draft_services.remove(index);
        if self.service_cursor == Some(removed.id) {
            self.service_cursor = None;
            self.service_name.clear();
            self.amount_input.clear();
        }
        self.notify(EditorEvent::ServiceListChanged);
        Ok(())
    }

    /// Commits the draft as a budget: appended, or replacing the budget
    /// under the budget cursor when one is being edited.
    ///
    /// Requires a client name, a visit date, and at least one service.
    /// On success the client/date fields and the draft list reset; the
    /// service cursor is independent state and is unaffected.
    pub fn finalize_budget(&mut self) -> Result<(), EditorError> {
        if self.client_name.trim().is_empty()
            || self.visit_date.trim().is_empty()
            || self.draft_services.is_empty()
        {
            return Err(EditorError::IncompleteBudget);
        }

        let budget = Budget::new(
            self.client_name.trim(),
            self.visit_date.trim(),
            std::mem::take(&mut self.draft_services),
        );
        tracing::debug!(client = %budget.client_name, total = %budget.total, "finalizing budget");

        let replaced = self
            .budget_cursor
            .take()
            .and_then(|id| self.budgets.iter().position(|b| b.id == id));
        match replaced {
            Some(position) => self.budgets[position] = budget,
            None => self.budgets.push(budget),
        }

        self.client_name.clear();
        self.visit_date.clear();
        self.notify(EditorEvent::BudgetListChanged);
        Ok(())
    }

    /// Loads a stored budget back into the draft for editing. The draft
    /// receives a copy; the stored budget is untouched until finalize.
    pub fn edit_budget(&mut self, index: usize) -> Result<(), EditorError> {
        let budget = self
            .budgets
            .get(index)
            .ok_or(EditorError::NoSuchEntry(index))?;
        self.client_name = budget.client_name.clone();
        self.visit_date = budget.visit_date.clone();
        self.draft_services = budget.services.clone();
        self.budget_cursor = Some(budget.id);
        self.notify(EditorEvent::DraftChanged);
        Ok(())
    }

    /// Removes the budget at `index`, shifting later entries left. Only a
    /// cursor pointing at the removed budget is invalidated.
    pub fn remove_budget(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.budgets.len() {
            return Err(EditorError::NoSuchEntry(index));
        }
        let removed = self.budgets.remove(index);
        if self.budget_cursor == Some(removed.id) {
            self.budget_cursor = None;
        }
        self.notify(EditorEvent::BudgetListChanged);
        Ok(())
    }

    /// Live sum of the draft service list.
    pub fn partial_total(&self) -> Amount {
        self.draft_services.iter().map(|s| s.amount).sum()
    }
}

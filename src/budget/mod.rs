use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Amount;

/// A single priced line item within a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub amount: Amount,
}

impl Service {
    pub fn new(name: impl Into<String>, amount: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
        }
    }
}

/// A finalized client visit: who, when, and the priced services rendered.
///
/// `visit_date` is the raw "YYYY-MM-DD" string the operator entered; the
/// exporter reorders it for display without calendar validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub client_name: String,
    pub visit_date: String,
    pub services: Vec<Service>,
    pub total: Amount,
}

impl Budget {
    pub fn new(
        client_name: impl Into<String>,
        visit_date: impl Into<String>,
        services: Vec<Service>,
    ) -> Self {
        let total = services.iter().map(|service| service.amount).sum();
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            visit_date: visit_date.into(),
            services,
            total,
        }
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}

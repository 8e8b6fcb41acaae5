//! Payee and payee location endpoints

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::error::ClinabResult;
use crate::models::{Payee, PayeeLocation, SavePayee};

#[derive(Debug, Deserialize)]
struct PayeesData {
    payees: Vec<Payee>,
}

#[derive(Debug, Deserialize)]
struct PayeeData {
    payee: Payee,
}

#[derive(Debug, Deserialize)]
struct PayeeLocationsData {
    payee_locations: Vec<PayeeLocation>,
}

#[derive(Serialize)]
struct PayeeBody<'a> {
    payee: &'a SavePayee,
}

impl ApiClient {
    /// List the payees of a budget, including deleted ones
    pub fn list_payees(&self, budget_id: &str) -> ClinabResult<Vec<Payee>> {
        let data: PayeesData = self.get(&format!("/budgets/{}/payees", budget_id), &[])?;
        Ok(data.payees)
    }

    /// Get a single payee
    pub fn get_payee(&self, budget_id: &str, payee_id: &str) -> ClinabResult<Payee> {
        let data: PayeeData =
            self.get(&format!("/budgets/{}/payees/{}", budget_id, payee_id), &[])?;
        Ok(data.payee)
    }

    /// Rename a payee
    pub fn update_payee(
        &self,
        budget_id: &str,
        payee_id: &str,
        payee: &SavePayee,
    ) -> ClinabResult<Payee> {
        let data: PayeeData = self.patch(
            &format!("/budgets/{}/payees/{}", budget_id, payee_id),
            &PayeeBody { payee },
        )?;
        Ok(data.payee)
    }

    /// List every payee location of a budget
    pub fn list_payee_locations(&self, budget_id: &str) -> ClinabResult<Vec<PayeeLocation>> {
        let data: PayeeLocationsData =
            self.get(&format!("/budgets/{}/payee_locations", budget_id), &[])?;
        Ok(data.payee_locations)
    }

    /// List the locations recorded for one payee
    pub fn list_payee_locations_for(
        &self,
        budget_id: &str,
        payee_id: &str,
    ) -> ClinabResult<Vec<PayeeLocation>> {
        let data: PayeeLocationsData = self.get(
            &format!("/budgets/{}/payees/{}/payee_locations", budget_id, payee_id),
            &[],
        )?;
        Ok(data.payee_locations)
    }
}

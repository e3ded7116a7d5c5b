use std::sync::Mutex;

use citadel_wallet_core::{AccountId, Consignment, ImportPort, VaultError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedConsignment {
    pub consignment: Consignment,
    pub account: AccountId,
}

/// Records consignments accepted into the wallet. Validation and chain
/// anchoring are the production import pipeline's concern.
#[derive(Debug, Default)]
pub struct ImportFlowAdapter {
    accepted: Mutex<Vec<AcceptedConsignment>>,
}

impl ImportFlowAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> Vec<AcceptedConsignment> {
        self.accepted
            .lock()
            .expect("import state poisoned")
            .clone()
    }
}

impl ImportPort for ImportFlowAdapter {
    fn accept_consignment(
        &self,
        consignment: &Consignment,
        account: &AccountId,
    ) -> Result<(), VaultError> {
        let mut accepted = self.accepted.lock().expect("import state poisoned");
        if accepted
            .iter()
            .any(|known| known.consignment.consignment_id == consignment.consignment_id)
        {
            return Err(VaultError::Invalid(format!(
                "consignment {} was already accepted",
                consignment.consignment_id
            )));
        }
        accepted.push(AcceptedConsignment {
            consignment: consignment.clone(),
            account: account.clone(),
        });
        tracing::info!(
            consignment = %consignment.consignment_id,
            %account,
            "accepted consignment"
        );
        Ok(())
    }
}

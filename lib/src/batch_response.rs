use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub batch_item_failures: Vec<BatchItemFailure>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemFailure {
    pub item_identifier: String,
}

impl BatchResponse {
    pub fn from_failures(failed_ids: Vec<String>) -> Self {
        Self {
            batch_item_failures: failed_ids.into_iter().map(|item_identifier| BatchItemFailure { item_identifier }).collect(),
        }
    }

    pub fn is_full_success(&self) -> bool {
        self.batch_item_failures.is_empty()
    }
}

use serde::{Deserialize, Serialize};

use super::Data;
use crate::validation::{validate_each, Validate, ValidationError};

/// The write template: fields a client fills in to create or edit an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub data: Vec<Data>,
}

impl Template {
    pub fn new(data: Vec<Data>) -> Self {
        Self { data }
    }
}

impl Validate for Template {
    fn validate(&self) -> Result<(), ValidationError> {
        // Data entries carry no required fields, so this never fails today.
        validate_each(&self.data, |_, e| e)
    }
}

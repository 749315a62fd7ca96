use dilemmacore::params::{ParamField, VehicleParams};
use dilemmacore::prelude::{ParamError, ParamResult};

/// Outcome of one edit of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Accepted(f64),
    /// The field was emptied; the parameter reverts to "not entered".
    Cleared,
    Rejected(ParamError),
}

impl FieldUpdate {
    /// Value to store in the parameters, if the edit changes them.
    pub fn value(&self) -> Option<f64> {
        match self {
            FieldUpdate::Accepted(value) => Some(*value),
            FieldUpdate::Cleared => Some(0.0),
            FieldUpdate::Rejected(_) => None,
        }
    }
}

/// Raw text of one input plus the last validation message.
#[derive(Debug, Clone)]
pub struct FieldEntry {
    pub field: ParamField,
    pub text: String,
    pub error: Option<String>,
}

/// The seven text inputs, kept as typed so partial entries survive.
#[derive(Debug, Clone)]
pub struct ParameterForm {
    entries: Vec<FieldEntry>,
}

impl ParameterForm {
    pub fn new() -> Self {
        Self {
            entries: ParamField::ALL
                .iter()
                .map(|&field| FieldEntry {
                    field,
                    text: String::new(),
                    error: None,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Stores `text` and returns the accepted value in entry units.
    ///
    /// An emptied field is not an error worth showing.
    pub fn update(&mut self, field: ParamField, text: String) -> ParamResult<f64> {
        let result = field.parse(&text);
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.field == field) {
            entry.error = match &result {
                Ok(_) | Err(ParamError::Empty { .. }) => None,
                Err(err) => Some(err.to_string()),
            };
            entry.text = text;
        }
        result
    }

    /// Stores `text` and writes the outcome into `params`.
    ///
    /// Cleared fields store zero so the plot drops their guides and curves;
    /// rejected entries leave `params` untouched.
    pub fn apply(
        &mut self,
        params: &mut VehicleParams,
        field: ParamField,
        text: String,
    ) -> FieldUpdate {
        let outcome = match self.update(field, text) {
            Ok(value) => FieldUpdate::Accepted(value),
            Err(ParamError::Empty { .. }) => FieldUpdate::Cleared,
            Err(err) => FieldUpdate::Rejected(err),
        };
        if let Some(value) = outcome.value() {
            params.set(field, value);
        }
        outcome
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|entry| entry.error.is_some())
    }
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self::new()
    }
}

//! Request and response bodies for the ledger endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::aggregation::DisplayData;
use crate::domain::foundation::{Money, PaymentId, ValidationError};
use crate::domain::ledger::Scope;

/// `?group=` filter accepted by the read endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeParams {
    pub group: Option<String>,
}

impl ScopeParams {
    pub fn into_scope(self) -> Scope {
        Scope::from_group(self.group)
    }
}

/// Amount as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    pub fn to_money(&self) -> Result<Money, ValidationError> {
        match self {
            AmountInput::Number(value) => Money::from_decimal(*value),
            AmountInput::Text(text) => Money::parse(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub name: String,
    pub amount: AmountInput,
    pub time: String,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPaymentResponse {
    pub result: String,
    pub payment_id: PaymentId,
}

/// `{name: [total, count]}`
pub type DisplayDataResponse = BTreeMap<String, (Money, u32)>;

pub fn display_response(data: DisplayData) -> DisplayDataResponse {
    data.into_iter()
        .map(|(name, summary)| (name, (summary.total, summary.count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation::PersonSummary;

    #[test]
    fn amount_accepts_number_and_string() {
        let number: RecordPaymentRequest =
            serde_json::from_str(r#"{"name":"A","amount":12.34,"time":"t"}"#).unwrap();
        let text: RecordPaymentRequest =
            serde_json::from_str(r#"{"name":"A","amount":"12.34","time":"t"}"#).unwrap();

        assert_eq!(number.amount.to_money().unwrap(), Money::from_cents(1234));
        assert_eq!(text.amount.to_money().unwrap(), Money::from_cents(1234));
        assert!(number.group.is_none());
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let request: RecordPaymentRequest =
            serde_json::from_str(r#"{"name":"A","amount":"twelve","time":"t"}"#).unwrap();
        assert!(request.amount.to_money().is_err());
    }

    #[test]
    fn display_data_serializes_as_pairs() {
        let mut data = DisplayData::new();
        data.insert(
            "Alice".to_string(),
            PersonSummary {
                total: Money::from_cents(300),
                count: 2,
            },
        );

        let json = serde_json::to_value(display_response(data)).unwrap();
        assert_eq!(json, serde_json::json!({"Alice": [3.0, 2]}));
    }
}

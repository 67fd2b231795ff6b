// src/portal/handlers/payments.rs

use axum::extract::{Extension, Json};
use tracing::info;

use super::PAYMENT_METHOD_KEY;
use crate::auth::{CurrentSession, SessionRecord};
use crate::common::{safe_email_log, ApiError, ValidationResult, Validator};
use crate::portal::models::{PaymentMethodRequest, PaymentMethodView};

pub struct PaymentMethodValidator;

impl Validator<PaymentMethodRequest> for PaymentMethodValidator {
    fn validate(&self, data: &PaymentMethodRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("bank_name", &data.bank_name, "Bank name");
        result.require("account_number", &data.account_number, "Account number");
        result.require("routing_number", &data.routing_number, "Routing number");

        result
    }
}

/// `•••• ` followed by the last four characters of the account number
pub fn mask_account(account_number: &str) -> String {
    let chars: Vec<char> = account_number.trim().chars().collect();
    let last4: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("•••• {}", last4)
}

/// Stored payout account, or the placeholder shown before one is set
pub(crate) async fn current_payment_method(
    session: &CurrentSession,
) -> Result<PaymentMethodView, ApiError> {
    Ok(session
        .read_json::<PaymentMethodView>(PAYMENT_METHOD_KEY)
        .await?
        .unwrap_or_default())
}

/// GET /earnings/payment-method
pub async fn get_payment_method(session: CurrentSession) -> Result<Json<PaymentMethodView>, ApiError> {
    Ok(Json(current_payment_method(&session).await?))
}

/// PUT /earnings/payment-method
/// Only the bank name and the masked account number are kept
///
/// # Request Body
/// ```json
/// { "bank_name": "Chase Bank", "account_number": "1234567890", "routing_number": "021000021" }
/// ```
pub async fn update_payment_method(
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Json(payload): Json<PaymentMethodRequest>,
) -> Result<Json<PaymentMethodView>, ApiError> {
    PaymentMethodValidator.validate(&payload).into_result()?;

    let view = PaymentMethodView {
        bank_name: payload.bank_name.trim().to_string(),
        masked_account: mask_account(&payload.account_number),
    };
    session.write_json(PAYMENT_METHOD_KEY, &view).await?;
    info!(email = %safe_email_log(&user.email), bank = %view.bank_name, "Payment method updated");

    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_account_keeps_last_four() {
        assert_eq!(mask_account("1234567890"), "•••• 7890");
        assert_eq!(mask_account(" 987 "), "•••• 987");
    }

    #[test]
    fn test_every_field_required() {
        let result = PaymentMethodValidator.validate(&PaymentMethodRequest {
            bank_name: "Chase Bank".to_string(),
            account_number: " ".to_string(),
            routing_number: String::new(),
        });

        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["account_number", "routing_number"]);
    }
}

//! HTTP handlers for ledger endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetDisplayDataQuery, GetNextPaymentQuery, ListPaymentsQuery, RecordPaymentCommand,
    RemovePaymentCommand,
};
use crate::domain::foundation::PaymentId;

use super::dto::{display_response, RecordPaymentRequest, RecordPaymentResponse, ScopeParams};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::LedgerAppState;

/// GET /api/ledger/display - Per-person totals and counts
pub async fn get_display_data(
    State(state): State<LedgerAppState>,
    Query(params): Query<ScopeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetDisplayDataQuery {
        scope: params.into_scope(),
    };
    let data = state.display_data_handler().handle(query).await?;
    Ok(Json(display_response(data)))
}

/// GET /api/ledger/next-payer - Next-payer weights
pub async fn get_next_payment(
    State(state): State<LedgerAppState>,
    Query(params): Query<ScopeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetNextPaymentQuery {
        scope: params.into_scope(),
    };
    let result = state.next_payment_handler().handle(query).await?;
    Ok(Json(result.weights))
}

/// GET /api/ledger/payments - Every payment, grouped
pub async fn list_payments(
    State(state): State<LedgerAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.list_payments_handler().handle(ListPaymentsQuery).await?;
    Ok(Json(payments))
}

/// POST /api/ledger/payments - Record a payment
pub async fn record_payment(
    State(state): State<LedgerAppState>,
    body: Result<Json<RecordPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = RecordPaymentCommand {
        amount: request.amount.to_money()?,
        name: request.name,
        group: request.group,
        time: request.time,
    };

    let result = state.record_payment_handler().handle(cmd).await?;

    let response = RecordPaymentResponse {
        result: "write successfully!".to_string(),
        payment_id: result.record.id,
    };
    Ok(Json(response))
}

/// DELETE /api/ledger/payments/:id - Remove a payment
pub async fn remove_payment(
    State(state): State<LedgerAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id.parse()?;
    state
        .remove_payment_handler()
        .handle(RemovePaymentCommand { payment_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use hrdesk_core::AppError;
use hrdesk_domain::ContractId;

use crate::dto::{ContractResponse, DraftContractRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_contracts_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ContractResponse>>> {
    let contracts = state
        .use_cases
        .list_contracts
        .execute()
        .await?
        .into_iter()
        .map(ContractResponse::from)
        .collect();

    Ok(Json(contracts))
}

pub async fn draft_contract_handler(
    State(state): State<AppState>,
    Json(payload): Json<DraftContractRequest>,
) -> ApiResult<(StatusCode, Json<ContractResponse>)> {
    let contract = state
        .use_cases
        .draft_contract
        .execute(payload.try_into()?)
        .await?;

    Ok((StatusCode::CREATED, Json(ContractResponse::from(contract))))
}

pub async fn get_contract_handler(
    State(state): State<AppState>,
    Path(contract_id): Path<String>,
) -> ApiResult<Json<ContractResponse>> {
    let contract_id = ContractId::parse(contract_id.as_str())?;
    let contract = state
        .use_cases
        .get_contract
        .execute(contract_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contract '{contract_id}' not found")))?;

    Ok(Json(ContractResponse::from(contract)))
}

pub async fn sign_contract_handler(
    State(state): State<AppState>,
    Path(contract_id): Path<String>,
) -> ApiResult<Json<ContractResponse>> {
    let contract_id = ContractId::parse(contract_id.as_str())?;
    let contract = state.use_cases.sign_contract.execute(contract_id).await?;

    Ok(Json(ContractResponse::from(contract)))
}

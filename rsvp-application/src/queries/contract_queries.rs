use crate::AppState;
use crate::AppError;
use rsvp_domain::ContractHandleInfo;

pub async fn contract_info(state: &AppState) -> Result<ContractHandleInfo, AppError> {
    state
        .contract
        .as_ref()
        .map(|handle| handle.info())
        .ok_or_else(|| AppError::NotFound("no contract handle bound".to_string()))
}

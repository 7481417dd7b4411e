use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Raw result of an insert operation.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct InsertResultDto {
    pub inserted_id: i32,
}

/// Raw result of an update operation.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateResultDto {
    pub modified_count: u64,
}

/// Raw result of a delete operation.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteResultDto {
    pub deleted_count: u64,
}

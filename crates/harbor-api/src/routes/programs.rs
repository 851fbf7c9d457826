use axum::Json;
use axum::extract::Path;

use harbor_assessment::programs::{Program, all_programs, get_program};

use crate::error::ApiError;

pub async fn list_programs() -> Json<&'static [Program]> {
    Json(all_programs())
}

pub async fn get_program_detail(
    Path(id): Path<String>,
) -> Result<Json<&'static Program>, ApiError> {
    let program =
        get_program(&id).ok_or_else(|| ApiError::NotFound(format!("program not found: {id}")))?;
    Ok(Json(program))
}

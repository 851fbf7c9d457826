use axum::Json;
use serde::{Deserialize, Serialize};

use harbor_assessment::programs::{self, Program};
use harbor_assessment::{QuestionBank, calculate_result, default_bank};
use harbor_core::models::assessment::{Answer, AssessmentResult};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ScoreRequest {
    answers: Vec<Answer>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    result: AssessmentResult,
    program_details: Vec<&'static Program>,
}

pub async fn list_questions() -> Json<&'static QuestionBank> {
    Json(default_bank())
}

pub async fn score_answers(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let bank = default_bank();
    for answer in &request.answers {
        bank.check_answer(answer)?;
    }

    let result = calculate_result(&request.answers, bank);
    let program_details = programs::resolve(&result.programs);
    Ok(Json(ScoreResponse {
        result,
        program_details,
    }))
}

use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::validate::validate;

use super::QuestionDetailResponse;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = "1"))]
    question_text: String,
    pub_date: DateTime<Utc>,
    choices: Vec<String>,
}

pub async fn create(
    pool: Data<PgPool>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<QuestionDetailResponse>, Error> {
    validate(&params)?;

    let conn = get_conn(&pool)?;
    let params = params.into_inner();

    let (question, choices) = block(move || {
        Question::create_with_choices(&conn, params.question_text, params.pub_date, params.choices)
    })
    .await??;

    Ok(Json(QuestionDetailResponse { question, choices }))
}

use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::{DateTime, Utc};
use diesel::Connection;
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use crate::validate::validate;

use super::QuestionDetailResponse;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = "1"))]
    question_text: String,
    pub_date: DateTime<Utc>,
    // When present, replaces the whole choice set; tallies start over at 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<Vec<String>>,
}

pub async fn update(
    pool: Data<PgPool>,
    params: Path<i32>,
    body: Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionDetailResponse>, Error> {
    validate(&body)?;

    let question_id = params.into_inner();
    let body = body.into_inner();
    let conn = get_conn(&pool)?;

    let (question, choices) = block(move || {
        conn.transaction::<(Question, Vec<Choice>), Error, _>(|| {
            let question =
                Question::update(&conn, question_id, body.question_text, body.pub_date)?;
            let choices = match body.choices {
                Some(choice_texts) => {
                    Choice::replace_for_question(&conn, question_id, choice_texts)?
                }
                None => Choice::get_by_question(&conn, question_id)?,
            };
            Ok((question, choices))
        })
    })
    .await??;

    Ok(Json(QuestionDetailResponse { question, choices }))
}

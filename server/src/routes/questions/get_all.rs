use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

/// Administrative listing: includes questions that are not yet published.
pub async fn get_all(pool: Data<PgPool>) -> Result<Json<Vec<QuestionResponse>>, Error> {
    let now = Utc::now();
    let conn = get_conn(&pool)?;

    let questions = block(move || Question::get_all(&conn)).await??;

    let results = questions
        .into_iter()
        .map(|question| {
            let was_published_recently = question.was_published_recently(now);
            QuestionResponse {
                id: question.id,
                question_text: question.question_text,
                pub_date: question.pub_date,
                was_published_recently,
            }
        })
        .collect();

    Ok(Json(results))
}

use actix_web::{
    web::{Data, Path},
    HttpResponse, Result,
};
use chrono::Utc;
use tera::Tera;

use db::PgPool;
use errors::Error;

use super::{load_question_page, render_detail};

pub async fn detail(
    templates: Data<Tera>,
    pool: Data<PgPool>,
    params: Path<i32>,
) -> Result<HttpResponse, Error> {
    let question_id = params.into_inner();

    let (question, choices) = load_question_page(&pool, question_id, Utc::now()).await?;

    render_detail(&templates, &question, &choices, None)
}

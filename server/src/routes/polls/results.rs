use actix_web::{
    web::{Data, Path},
    HttpResponse, Result,
};
use chrono::Utc;
use tera::{Context, Tera};

use db::PgPool;
use errors::Error;

use super::{load_question_page, render};

pub async fn results(
    templates: Data<Tera>,
    pool: Data<PgPool>,
    params: Path<i32>,
) -> Result<HttpResponse, Error> {
    let question_id = params.into_inner();

    let (question, choices) = load_question_page(&pool, question_id, Utc::now()).await?;

    let mut context = Context::new();
    context.insert("question", &question);
    context.insert("choices", &choices);

    render(&templates, "polls/results.html", &context)
}

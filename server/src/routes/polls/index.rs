use actix_web::{
    web::{block, Data},
    HttpResponse, Result,
};
use chrono::Utc;
use tera::{Context, Tera};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use super::render;

pub async fn index(templates: Data<Tera>, pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let now = Utc::now();
    let conn = get_conn(&pool)?;

    let questions = block(move || Question::get_published(&conn, now)).await??;

    let mut context = Context::new();
    context.insert("latest_question_list", &questions);

    render(&templates, "polls/index.html", &context)
}

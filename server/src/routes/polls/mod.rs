use actix_web::{web::block, HttpResponse};
use chrono::{DateTime, Utc};
use tera::{Context, Tera};

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

mod detail;
mod index;
mod results;
mod vote;

pub use self::detail::*;
pub use self::index::*;
pub use self::results::*;
pub use self::vote::*;

fn render(templates: &Tera, name: &str, context: &Context) -> Result<HttpResponse, Error> {
    let body = templates.render(name, context)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Loads a question and its choices, or NotFound when the question is absent
/// or not yet published at `now`. The two cases are indistinguishable on
/// purpose so unpublished questions do not leak.
async fn load_question_page(
    pool: &PgPool,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<(Question, Vec<Choice>), Error> {
    let conn = get_conn(pool)?;

    let page = block(move || -> Result<(Question, Vec<Choice>), Error> {
        let question = Question::find_published(&conn, question_id, now)?;
        let choices = Choice::get_by_question(&conn, question.id)?;
        Ok((question, choices))
    })
    .await??;

    Ok(page)
}

fn render_detail(
    templates: &Tera,
    question: &Question,
    choices: &[Choice],
    error_message: Option<&str>,
) -> Result<HttpResponse, Error> {
    let mut context = Context::new();
    context.insert("question", question);
    context.insert("choices", choices);
    context.insert("error_message", &error_message.unwrap_or(""));

    render(templates, "polls/detail.html", &context)
}

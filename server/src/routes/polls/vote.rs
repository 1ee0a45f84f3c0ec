use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse, Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tera::Tera;

use db::{get_conn, models::Choice, PgPool};
use errors::Error;

use super::{load_question_page, render_detail};

#[derive(Clone, Deserialize, Serialize)]
pub struct VoteForm {
    choice: Option<i32>,
}

pub async fn vote(
    templates: Data<Tera>,
    pool: Data<PgPool>,
    params: Path<i32>,
    form: Form<VoteForm>,
) -> Result<HttpResponse, Error> {
    let question_id = params.into_inner();

    let (question, choices) = load_question_page(&pool, question_id, Utc::now()).await?;

    let choice_id = match form.choice {
        Some(choice_id) => choice_id,
        None => {
            return render_detail(
                &templates,
                &question,
                &choices,
                Some("You didn't select a choice."),
            );
        }
    };

    let conn = get_conn(&pool)?;
    let res = block(move || Choice::record_vote(&conn, question_id, choice_id)).await?;

    match res {
        Ok(_) => Ok(HttpResponse::Found()
            .append_header((
                header::LOCATION,
                format!("/polls/{}/results/", question_id),
            ))
            .finish()),
        Err(Error::NotFound(_)) => {
            debug!(
                "vote rejected: choice {} does not belong to question {}",
                choice_id, question_id
            );
            render_detail(
                &templates,
                &question,
                &choices,
                Some("That choice isn't part of this poll."),
            )
        }
        Err(err) => Err(err),
    }
}

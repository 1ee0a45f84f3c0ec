use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

pub async fn delete(pool: Data<PgPool>, params: Path<i32>) -> Result<HttpResponse, Error> {
    let question_id = params.into_inner();
    let conn = get_conn(&pool)?;

    block(move || Question::delete(&conn, question_id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

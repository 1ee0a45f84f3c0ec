use chrono::{DateTime, Utc};
use diesel::{self, Connection, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(Associations, Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[belongs_to(Question)]
#[table_name = "choices"]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        if choice_text.trim().is_empty() {
            return Err(Error::ValidationError(vec![
                "Choice text cannot be blank".to_string(),
            ]));
        }

        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn get_by_question(conn: &PgConnection, question_id: i32) -> Result<Vec<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id.asc())
            .get_results(conn)?;

        Ok(results)
    }

    /// Records one vote as a single filtered UPDATE. The increment happens in
    /// SQL, so concurrent votes on the same choice cannot lose updates.
    /// NotFound when the choice does not belong to the question.
    pub fn record_vote(
        conn: &PgConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result(conn)?;

        Ok(choice)
    }

    /// Swaps in a whole new choice set for the question. The batch is staged
    /// inside a transaction and rejected as a unit when it is empty, which is
    /// how the "at least one choice" rule stays enforced across edits.
    pub fn replace_for_question(
        conn: &PgConnection,
        question_id: i32,
        choice_texts: Vec<String>,
    ) -> Result<Vec<Choice>, Error> {
        if choice_texts.is_empty() {
            return Err(Error::ValidationError(vec![
                "At least one choice required.".to_string(),
            ]));
        }

        conn.transaction::<Vec<Choice>, Error, _>(|| {
            use choices::dsl::{choices as choices_table, question_id as question_id_field};

            diesel::delete(choices_table.filter(question_id_field.eq(question_id)))
                .execute(conn)?;

            let mut results = Vec::with_capacity(choice_texts.len());
            for choice_text in choice_texts {
                results.push(Choice::create(conn, question_id, choice_text)?);
            }

            Ok(results)
        })
    }
}

use chrono::{DateTime, Duration, Utc};
use diesel::{self, Connection, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Choice;
use crate::schema::{choices, questions};

/// Trailing window for `was_published_recently`.
const RECENT_WINDOW_DAYS: i64 = 1;

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Questions visible to readers at `now`, newest first. Future pub_dates
    /// represent questions that are not yet published.
    pub fn get_published(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .get_results(conn)?;

        Ok(results)
    }

    /// Looks up a question by id, treating an unpublished question the same as
    /// a missing one so callers cannot probe for content scheduled later.
    pub fn find_published(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first(conn)?;

        Ok(question)
    }

    /// Every question regardless of publication state, newest pub_date first.
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        let results = questions_table.order(pub_date.desc()).get_results(conn)?;

        Ok(results)
    }

    /// Inserts the question and its choices in one transaction. A question with
    /// no choices is rejected before anything is written.
    pub fn create_with_choices(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
        choice_texts: Vec<String>,
    ) -> Result<(Question, Vec<Choice>), Error> {
        conn.transaction::<(Question, Vec<Choice>), Error, _>(|| {
            let question: Question = diesel::insert_into(questions::table)
                .values(NewQuestion {
                    question_text,
                    pub_date,
                })
                .get_result(conn)?;

            let new_choices = Choice::replace_for_question(conn, question.id, choice_texts)?;

            Ok((question, new_choices))
        })
    }

    pub fn update(
        conn: &PgConnection,
        question_id: i32,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl;

        let question = diesel::update(dsl::questions.find(question_id))
            .set((
                dsl::question_text.eq(question_text),
                dsl::pub_date.eq(pub_date),
            ))
            .get_result(conn)?;

        Ok(question)
    }

    /// Cascade delete: choices go first, in the same transaction, since the
    /// question exclusively owns them.
    pub fn delete(conn: &PgConnection, question_id: i32) -> Result<(), Error> {
        conn.transaction::<(), Error, _>(|| {
            use choices::dsl::{choices as choices_table, question_id as choice_question_id};

            diesel::delete(choices_table.filter(choice_question_id.eq(question_id)))
                .execute(conn)?;
            let deleted =
                diesel::delete(questions::dsl::questions.find(question_id)).execute(conn)?;
            if deleted == 0 {
                return Err(Error::NotFound("Record not found".into()));
            }

            Ok(())
        })
    }

    /// True when `pub_date` falls inside the trailing one day window ending at
    /// `now`, inclusive on both bounds.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
        window_start <= self.pub_date && self.pub_date <= now
    }
}

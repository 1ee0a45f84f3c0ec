use chrono::{Duration, Utc};
use diesel::{self, ExpressionMethods, RunQueryDsl};
use dotenv::dotenv;

use db::{
    get_conn,
    models::Question,
    new_pool,
    schema::{choices, questions},
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    for (question_text, days_ago, choice_texts) in &[
        (
            "What's your favourite text editor?",
            10,
            vec!["vim", "emacs", "Something else entirely"],
        ),
        ("Tabs or spaces?", 1, vec!["Tabs", "Spaces"]),
        (
            "Best season of the year?",
            0,
            vec!["Spring", "Summer", "Autumn", "Winter"],
        ),
    ] {
        let question: Question = diesel::insert_into(questions::table)
            .values((
                questions::dsl::question_text.eq(question_text),
                questions::dsl::pub_date.eq(Utc::now() - Duration::days(*days_ago)),
            ))
            .get_result(&conn)
            .unwrap();

        for choice_text in choice_texts {
            diesel::insert_into(choices::table)
                .values((
                    choices::dsl::question_id.eq(question.id),
                    choices::dsl::choice_text.eq(choice_text),
                ))
                .execute(&conn)
                .unwrap();
        }
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::{Mutex, MutexGuard};

    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::BoxBody, dev::ServiceResponse, error::Error, http::header, test, web::Data, App,
    };
    use chrono::{Duration, Utc};
    use diesel::{self, ExpressionMethods, RunQueryDsl};
    use once_cell::sync::Lazy;
    use serde::{de::DeserializeOwned, Serialize};
    use tera::Tera;

    use db::{
        models::{Choice, Question},
        schema::{choices, questions},
    };

    use crate::routes::routes;

    // Tests share one database, so tests that write serialize on this lock
    static DB_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    pub fn db_guard() -> MutexGuard<'static, ()> {
        DB_LOCK.lock().unwrap_or_else(|err| err.into_inner())
    }

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(Data::new(db::new_pool()))
                .app_data(Data::new(load_templates()))
                .configure(routes),
        )
        .await
    }

    fn load_templates() -> Tera {
        Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
            .expect("failed to load templates")
    }

    /// Helper for HTTP GET integration tests against JSON endpoints
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests against template-rendered pages
    pub async fn test_get_html(route: &str) -> (u16, String) {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Helper for HTTP POST integration tests against JSON endpoints
    pub async fn test_post<T: Serialize, R>(route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::post().set_json(&params).uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP PUT integration tests against JSON endpoints
    pub async fn test_put<T: Serialize, R>(route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::put().set_json(&params).uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete(route: &str) -> u16 {
        let app = get_service().await;
        let req = test::TestRequest::delete().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        res.status().as_u16()
    }

    /// Helper for form POSTs; returns the Location header for redirect asserts
    pub async fn test_post_form<T: Serialize>(route: &str, params: T) -> (u16, Option<String>, String) {
        let app = get_service().await;
        let req = test::TestRequest::post().set_form(&params).uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body = test::read_body(res).await;

        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    pub fn create_question(
        conn: &db::Connection,
        question_text: &str,
        days_from_now: i64,
    ) -> Question {
        diesel::insert_into(questions::table)
            .values((
                questions::dsl::question_text.eq(question_text),
                questions::dsl::pub_date.eq(Utc::now() + Duration::days(days_from_now)),
            ))
            .get_result(conn)
            .unwrap()
    }

    pub fn create_choice(conn: &db::Connection, question_id: i32, choice_text: &str) -> Choice {
        diesel::insert_into(choices::table)
            .values((
                choices::dsl::question_id.eq(question_id),
                choices::dsl::choice_text.eq(choice_text),
            ))
            .get_result(conn)
            .unwrap()
    }

    pub fn clean_tables(conn: &db::Connection) {
        diesel::delete(choices::table).execute(conn).unwrap();
        diesel::delete(questions::table).execute(conn).unwrap();
    }
}

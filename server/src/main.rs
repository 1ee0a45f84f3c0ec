#[macro_use]
extern crate log;
#[macro_use]
extern crate validator_derive;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use tera::Tera;

mod routes;
mod tests;
mod validate;

use crate::routes::routes;
use errors::ErrorResponse;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();
    let templates = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("failed to load templates");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(templates.clone()))
            .configure(routes)
            .default_service(web::route().to(|| async {
                let response: ErrorResponse = "Not Found".into();
                HttpResponse::NotFound().json(response)
            }))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}

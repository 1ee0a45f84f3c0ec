use serde::{Deserialize, Serialize};

use db::models::{Choice, Question};

mod create;
mod delete;
mod get_all;
mod update;

pub use self::create::*;
pub use self::delete::*;
pub use self::get_all::*;
pub use self::update::*;

#[derive(Deserialize, Serialize)]
pub struct QuestionDetailResponse {
    pub question: Question,
    pub choices: Vec<Choice>,
}

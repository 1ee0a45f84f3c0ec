mod choice;
mod question;

pub use self::choice::{Choice, NewChoice};
pub use self::question::{NewQuestion, Question};

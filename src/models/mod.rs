pub mod quiz;

pub use quiz::{Chapter, Question, QuestionOption, QuestionType};

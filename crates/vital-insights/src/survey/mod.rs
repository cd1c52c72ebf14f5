pub mod domain;
pub mod report;
pub mod storage;

mod scoring;
mod validate;

pub use domain::{ActivityLevel, FastFoodFrequency, Goal, SurveyAnswers};
pub use report::{generate, Report};
pub use storage::{StoreError, SurveyId, SurveyRecord, SurveyStore};

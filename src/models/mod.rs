pub mod outfit;
pub mod questionnaire;

pub use outfit::Outfit;
pub use questionnaire::{Budget, Gender, Occasion, Style, SuggestRequest};

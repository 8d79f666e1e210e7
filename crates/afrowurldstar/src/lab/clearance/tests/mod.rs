mod common;
mod engine;
mod questionnaire;

mod gemini_client;
mod mock_answer_generator;

pub use gemini_client::{GeminiClient, NO_TEXT_MESSAGE, build_prompt};
pub use mock_answer_generator::MockAnswerGenerator;

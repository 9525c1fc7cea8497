use crate::application::ports::{AnswerGenerator, AnswerGeneratorError};

pub struct MockAnswerGenerator;

#[async_trait::async_trait]
impl AnswerGenerator for MockAnswerGenerator {
    async fn generate(
        &self,
        _context: &str,
        _question: &str,
    ) -> Result<String, AnswerGeneratorError> {
        Ok("Mock answer".to_string())
    }
}

//! The chatbot service behind the `/ask` endpoint.

use crate::error::ServerResult;
use async_trait::async_trait;
use docbot_chain::ConversationalRetrievalChain;
use std::sync::Arc;
use tracing::debug;

const SEPARATOR: &str = "======================================================";

/// Answers one question.
#[async_trait]
pub trait ChatbotService: Send + Sync {
    async fn ask_question(&self, question: &str) -> ServerResult<String>;
}

/// Answers through a conversational retrieval chain.
#[derive(Clone)]
pub struct ChainChatbotService {
    chain: Arc<ConversationalRetrievalChain>,
}

impl ChainChatbotService {
    pub fn new(chain: Arc<ConversationalRetrievalChain>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ChatbotService for ChainChatbotService {
    async fn ask_question(&self, question: &str) -> ServerResult<String> {
        debug!("{}", SEPARATOR);
        debug!("Question: {}", question);
        let answer = self.chain.execute(question).await?;
        debug!("Answer: {}", answer);
        debug!("{}", SEPARATOR);
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;
    use docbot_chain::{ChainError, ChainResult, ChatModel, Embedder};
    use docbot_core::ChatMessage;

    struct ConstantEmbedder;

    #[async_trait]
    impl Embedder for ConstantEmbedder {
        async fn embed(&self, _text: &str) -> ChainResult<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }
    }

    struct LastMessageModel;

    #[async_trait]
    impl ChatModel for LastMessageModel {
        async fn chat(&self, messages: &[ChatMessage]) -> ChainResult<String> {
            Ok(format!("{} messages", messages.len()))
        }
    }

    fn service() -> ChainChatbotService {
        let chain = ConversationalRetrievalChain::builder()
            .embedder(Arc::new(ConstantEmbedder))
            .chat_model(Arc::new(LastMessageModel))
            .build()
            .unwrap();
        ChainChatbotService::new(Arc::new(chain))
    }

    #[tokio::test]
    async fn test_ask_question_through_chain() {
        let service = service();

        assert_eq!(service.ask_question("first").await.unwrap(), "1 messages");
        assert_eq!(service.ask_question("second").await.unwrap(), "3 messages");
    }

    #[tokio::test]
    async fn test_blank_question_is_an_error() {
        let err = service().ask_question("").await.unwrap_err();
        assert!(matches!(err, ServerError::Chain(ChainError::BlankQuestion)));
    }
}

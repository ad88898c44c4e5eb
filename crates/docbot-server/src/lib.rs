//! Docbot Server - The HTTP surface of the document chatbot.
//!
//! Serves a static chat page at `/` and answers questions posted to `/ask`
//! through a [`ChatbotService`].

mod error;
mod routes;
mod server;
mod service;
mod state;

pub use error::{ServerError, ServerResult};
pub use routes::{router, FALLBACK_ANSWER};
pub use server::{build_chain, DocbotServer};
pub use service::{ChainChatbotService, ChatbotService};
pub use state::AppState;

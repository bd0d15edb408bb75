//! Canned Advisor
//!
//! Chat stand-in for the dashboard. Replies are picked at random from a
//! fixed list; nothing here looks at the portfolio or the question.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

const GREETING: &str = "Ciao! Sono il tuo AI Financial Advisor. Come posso aiutarti oggi?";

const REPLIES: [&str; 4] = [
    "Interessante domanda! Basandomi sui dati del tuo portfolio, suggerirei di considerare una maggiore diversificazione.",
    "Dal mio punto di vista, questa potrebbe essere una buona opportunità di investimento, ma valuta sempre il tuo profilo di rischio.",
    "I dati di mercato mostrano tendenze positive in quel settore. Vuoi che analizzi più nel dettaglio?",
    "Ottima osservazione! Ti consiglio di monitorare questi indicatori nei prossimi giorni.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Advisor,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn advisor(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sender: Sender::Advisor,
            timestamp: Utc::now(),
        }
    }
}

/// Advisor that answers with one of four canned replies
#[derive(Clone, Debug, Default)]
pub struct CannedAdvisor;

impl CannedAdvisor {
    pub const fn new() -> Self {
        Self
    }

    /// Opening message of a conversation
    pub fn greeting(&self) -> ChatMessage {
        ChatMessage::advisor(GREETING)
    }

    /// All replies the advisor can give
    pub const fn replies(&self) -> &'static [&'static str] {
        &REPLIES
    }

    /// Answer a user message.
    ///
    /// # Errors
    ///
    /// [`AnalyticsError::InvalidArgument`] for a blank message.
    pub fn respond(&self, message: &str) -> Result<ChatMessage> {
        if message.trim().is_empty() {
            return Err(AnalyticsError::InvalidArgument("message must not be empty".into()));
        }

        let reply = REPLIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(GREETING);

        tracing::debug!(len = message.len(), "canned advisor reply");
        Ok(ChatMessage::advisor(reply))
    }
}

//! Wire messages for the backend seam.

use serde::{Deserialize, Serialize};

/// Intents the view layer would send to a future poker backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMsg {
    PlaceBet { amount: u32 },
}

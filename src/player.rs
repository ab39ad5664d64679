//! Player roster types.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A registered tournament player.
///
/// Players carry identity and reachability only; move selection lives behind
/// the HTTP endpoint at `network_address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Unique player name.
    user_name: String,
    /// Base URL of the player's agent endpoint.
    network_address: String,
}

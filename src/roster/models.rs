use serde::{Deserialize, Serialize};

use crate::scoring::ScoringError;

/// A known participant as supplied by the roster owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// The host never pays or receives uma in rounds of three or more
    #[serde(default)]
    pub host: bool,
}

fn default_active() -> bool {
    true
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            host: false,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn as_host(mut self) -> Self {
        self.host = true;
        self
    }
}

/// Ordered snapshot of the roster at scoring time.
/// Deserializing goes through [`Roster::try_new`], so stored rosters with
/// more than one flagged host are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster without checking host flags; if several players are
    /// flagged, the first flagged one is the host.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Builds a roster, refusing more than one flagged host
    pub fn try_new(players: Vec<Player>) -> Result<Self, ScoringError> {
        let hosts: Vec<String> = players
            .iter()
            .filter(|p| p.host)
            .map(|p| p.id.clone())
            .collect();

        if hosts.len() > 1 {
            return Err(ScoringError::MultipleHosts(hosts));
        }
        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.active)
    }

    /// The flagged host, or the first player when nobody carries the flag
    pub fn host(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.host)
            .or_else(|| self.players.first())
    }

    pub fn host_id(&self) -> Option<&str> {
        self.host().map(|p| p.id.as_str())
    }

    /// Moves the host flag to `player_id`, clearing it everywhere else
    pub fn set_host(&mut self, player_id: &str) -> Result<(), ScoringError> {
        if self.get(player_id).is_none() {
            return Err(ScoringError::UnknownHost(player_id.to_string()));
        }

        for player in &mut self.players {
            player.host = player.id == player_id;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = ScoringError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Self::try_new(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<T: IntoIterator<Item = Player>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

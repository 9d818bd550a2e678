use std::sync::Arc;

use golf_points::{
    InMemoryScoreRepository, Player, Roster, ScoringConfig, ScoringService,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub repository: Arc<InMemoryScoreRepository>,
    pub service: ScoringService,
    pub roster: Roster,
}

pub struct TestSetupBuilder {
    players: Vec<Player>,
    config: ScoringConfig,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            config: ScoringConfig::default(),
        }
    }

    /// First name is the host
    pub fn with_players(mut self, names: Vec<&str>) -> Self {
        self.players = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let player = Player::new(name, name.to_uppercase());
                if index == 0 {
                    player.as_host()
                } else {
                    player
                }
            })
            .collect();
        self
    }

    pub fn with_four_players(self) -> Self {
        self.with_players(vec!["host", "alice", "bob", "carol"])
    }

    #[allow(dead_code)]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryScoreRepository::new());
        let service = ScoringService::new(repository.clone(), self.config);

        TestSetup {
            repository,
            service,
            roster: Roster::new(self.players),
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

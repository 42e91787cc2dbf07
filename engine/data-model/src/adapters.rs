//! Inbound adapter contracts. The core never implements these beyond test
//! fakes; real implementations (HTTP client, scrapers, RSS reader,
//! transcript fetcher, LLM summariser) live outside the core.

use crate::club::Club;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::gameweek::Gameweek;
use crate::ids::PlayerId;
use crate::intelligence::RawSignal;
use crate::performance::PlayerGameweekPerformance;
use crate::player::Player;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub struct Bootstrap {
    pub players: Vec<Player>,
    pub clubs: Vec<Club>,
    pub gameweeks: Vec<Gameweek>,
}

#[derive(Clone, Debug)]
pub struct LivePlayerState {
    pub player: PlayerId,
    pub minutes: u16,
    pub live_points: i32,
}

#[async_trait]
pub trait LeagueDataSource: Send + Sync {
    async fn bootstrap(&self) -> Result<Bootstrap>;
    async fn player_history(&self, player: PlayerId) -> Result<Vec<PlayerGameweekPerformance>>;
    async fn fixtures(&self) -> Result<Vec<Fixture>>;
    async fn live_gameweek(&self, gameweek: u8) -> Result<Vec<LivePlayerState>>;
}

#[async_trait]
pub trait IntelligenceSource: Send + Sync {
    fn source_id(&self) -> &str;
    async fn poll(&self, since: DateTime<Utc>) -> Result<Vec<RawSignal>>;
}

#[cfg(test)]
pub mod fakes {
    use super::*;
    use crate::gameweek::Gameweek;
    use std::sync::Mutex;

    /// An in-memory `LeagueDataSource` for use by dependent crates' tests.
    #[derive(Default)]
    pub struct FakeLeagueDataSource {
        pub players: Vec<Player>,
        pub clubs: Vec<Club>,
        pub gameweeks: Vec<Gameweek>,
        pub fixtures: Vec<Fixture>,
        pub history: Mutex<std::collections::HashMap<PlayerId, Vec<PlayerGameweekPerformance>>>,
    }

    #[async_trait]
    impl LeagueDataSource for FakeLeagueDataSource {
        async fn bootstrap(&self) -> Result<Bootstrap> {
            Ok(Bootstrap {
                players: self.players.clone(),
                clubs: self.clubs.clone(),
                gameweeks: self.gameweeks.clone(),
            })
        }

        async fn player_history(&self, player: PlayerId) -> Result<Vec<PlayerGameweekPerformance>> {
            Ok(self.history.lock().unwrap().get(&player).cloned().unwrap_or_default())
        }

        async fn fixtures(&self) -> Result<Vec<Fixture>> {
            Ok(self.fixtures.clone())
        }

        async fn live_gameweek(&self, _gameweek: u8) -> Result<Vec<LivePlayerState>> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    pub struct FakeIntelligenceSource {
        pub id: String,
        pub items: Vec<RawSignal>,
    }

    #[async_trait]
    impl IntelligenceSource for FakeIntelligenceSource {
        fn source_id(&self) -> &str {
            &self.id
        }

        async fn poll(&self, since: DateTime<Utc>) -> Result<Vec<RawSignal>> {
            Ok(self.items.iter().filter(|s| s.observed_at > since).cloned().collect())
        }
    }
}

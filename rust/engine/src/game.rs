use crate::errors::GameError;
use crate::player::Player;

const ILLEGAL_NAME_CHARS: &[char] = &['\\', '/', ':', '?', '"', '<', '>', '|', '*'];

/// The seated players and the dealer position, kept across rounds.
/// Seat order is join order; the dealer index always points at a seat
/// while anyone is seated.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    dealer: usize,
    max_players: usize,
}

impl GameState {
    pub fn new(max_players: usize) -> Self {
        Self {
            players: Vec::new(),
            dealer: 0,
            max_players,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn max_players(&self) -> usize {
        self.max_players
    }
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Checks a name without seating anyone.
    pub fn check_name(&self, name: &str) -> Result<(), GameError> {
        if name.trim().is_empty() || name.contains(ILLEGAL_NAME_CHARS) {
            return Err(GameError::IllegalName(name.to_string()));
        }
        if self.find_player(name).is_some() {
            return Err(GameError::DuplicatePlayer(name.to_string()));
        }
        Ok(())
    }

    /// Seats a player at the end of the table.
    pub fn add_player(&mut self, player: Player) -> Result<usize, GameError> {
        if self.players.len() >= self.max_players {
            return Err(GameError::TooManyPlayers {
                players: self.players.len() + 1,
                max: self.max_players,
            });
        }
        self.check_name(player.name())?;
        self.players.push(player);
        Ok(self.players.len() - 1)
    }

    /// Unseats a player by name (case-insensitive). Seats after the removed
    /// one shift down; the dealer keeps pointing at the same person when
    /// possible.
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        let seat = self.find_player(name)?;
        let removed = self.players.remove(seat);
        if seat < self.dealer {
            self.dealer -= 1;
        }
        self.normalize_dealer();
        Some(removed)
    }

    pub fn find_player(&self, name: &str) -> Option<usize> {
        self.players
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn rotate_dealer(&mut self) {
        if !self.players.is_empty() {
            self.dealer = (self.dealer + 1) % self.players.len();
        }
    }

    pub fn set_dealer(&mut self, seat: usize) {
        self.dealer = seat;
        self.normalize_dealer();
    }

    fn normalize_dealer(&mut self) {
        if self.players.is_empty() {
            self.dealer = 0;
        } else {
            self.dealer %= self.players.len();
        }
    }

    /// Names of seated players with no chips left.
    pub fn broke_players(&self) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| p.chips() == 0)
            .map(|p| p.name().to_string())
            .collect()
    }
}

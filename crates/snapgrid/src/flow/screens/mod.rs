//! Screen implementations for the game flow state machine.

mod capture;
mod home;
mod leaderboard;
mod puzzle;
mod win;

pub use capture::CaptureScreen;
pub use home::HomeScreen;
pub use leaderboard::LeaderboardScreen;
pub use puzzle::PuzzleScreen;
pub use win::WinScreen;

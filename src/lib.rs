//! Hero vs. villain battles: validate two combatants, roll weapon damage, pick a winner,
//! keep score for the session and append every resolved round to a history log.

pub mod battle;
pub mod cli;
pub mod config;
pub mod history;
pub mod narration;
pub mod odds;
pub mod parallel;
pub mod scoreboard;
pub mod server;
pub mod session;

pub mod build_info;
pub mod constants;
pub mod engine;
pub mod games;
pub mod input;
pub mod ledger;
pub mod persistence;
pub mod ui;

pub use engine::{
    GameSession, Phase, SessionConfig, SessionController, TickReport, TuningOverrides,
};
pub use games::GameKind;
pub use ledger::{LedgerSnapshot, ScoreStore};

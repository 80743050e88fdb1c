//! Scorekeeping orchestration - bridges the pure scoring engine with the
//! frame store.
//!
//! Mutating operations expect to run inside the caller's transaction
//! (see `db::txn::with_txn`) so that a new frame and its retroactive
//! fixups land atomically; per-game serialization is the transaction's
//! job, with the unique frame-slot index as the backstop for races.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::frames::LAST_FRAME;
use crate::domain::parsing::parse_notation;
use crate::domain::scoring::{score_append, Lookback};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::repos::frames::{self, Frame, FrameData};
use crate::repos::games::{self, Game};
use crate::utils::game_id::generate_game_id;

/// Outcome of one append as exposed to callers. Score and total stay
/// `None` while the frame waits on bonus balls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameResult {
    pub frame_no: i16,
    pub frame_score: Option<i16>,
    pub running_total: Option<i16>,
}

/// Whole-game total: the running total of the highest-numbered frame
/// that has one resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTotal {
    pub game_id: String,
    pub total_score: Option<i16>,
}

/// Register a new game with a fresh opaque id.
pub async fn register_game(txn: &DatabaseTransaction) -> Result<Game, DomainError> {
    let game = games::create_game(txn, &generate_game_id()).await?;
    info!(game_id = %game.id, "registered game");
    Ok(game)
}

/// Record one frame's notation for a game.
///
/// Validates before touching any row: game existence, terminal state,
/// then notation. The engine runs on an in-memory lookback window fetched
/// once; its output batch (new frame plus up to two fixups) is persisted
/// inside the caller's transaction.
pub async fn record_frame(
    txn: &DatabaseTransaction,
    game_id: &str,
    notation: &str,
) -> Result<FrameResult, DomainError> {
    let game = games::require_game(txn, game_id).await?;

    let next_no = match frames::max_frame_no(txn, &game.id).await? {
        Some(no) if no >= LAST_FRAME => {
            warn!(game_id = %game.id, "append rejected: game already played");
            return Err(DomainError::validation(
                ValidationKind::GameComplete,
                format!("game '{game_id}' has already been played"),
            ));
        }
        Some(no) => no + 1,
        None => 1,
    };

    let attempts = parse_notation(notation, next_no)?;

    let version = frames::max_version(txn, &game.id, next_no).await?.unwrap_or(0) + 1;

    // Single storage read for the lookback window; the engine itself
    // never touches the store.
    let history = frames::ordered_frames(txn, &game.id).await?;
    let window = lookback_window(&history, next_no);

    let outcome = score_append(next_no, attempts, &window);

    for fixup in &outcome.resolved {
        let row = active_row(&history, fixup.frame_no)?;
        frames::update_score(txn, row.id, fixup.frame_score, fixup.running_total).await?;
    }

    let created = frames::create_frame(
        txn,
        FrameData {
            game_id: game.id.clone(),
            frame_no: next_no,
            frame_version: version,
            attempts,
        },
    )
    .await?;

    if let (Some(score), Some(total)) = (
        outcome.appended.frame_score,
        outcome.appended.running_total,
    ) {
        frames::update_score(txn, created.id, score, total).await?;
    }

    info!(
        game_id = %game.id,
        frame_no = next_no,
        version,
        fixups = outcome.resolved.len(),
        "recorded frame"
    );

    Ok(FrameResult {
        frame_no: next_no,
        frame_score: outcome.appended.frame_score,
        running_total: outcome.appended.running_total,
    })
}

/// Whole-game total query.
pub async fn game_total<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<GameTotal, DomainError> {
    let game = games::require_game(conn, game_id).await?;
    let history = frames::ordered_frames(conn, &game.id).await?;
    let total_score = history.iter().rev().find_map(|f| f.running_total);
    Ok(GameTotal {
        game_id: game.id,
        total_score,
    })
}

fn lookback_window(history: &[Frame], next_no: i16) -> Lookback {
    let at = |no: i16| {
        history
            .iter()
            .find(|f| f.frame_no == no)
            .map(Frame::state)
    };
    Lookback {
        prev: at(next_no - 1),
        prev2: at(next_no - 2),
        prev3: at(next_no - 3),
    }
}

fn active_row(history: &[Frame], frame_no: i16) -> Result<&Frame, DomainError> {
    history.iter().find(|f| f.frame_no == frame_no).ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("resolved frame {frame_no} has no stored row"),
        )
    })
}

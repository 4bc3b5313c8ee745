//! Line-delimited JSON adapter over the session registry.
//!
//! One request per input line, one reply per output line:
//!
//! ```text
//! {"op":"new","difficulty":"easy"}
//! {"op":"guess","game_id":"<id>","letter":"e"}
//! {"op":"restart","game_id":"<id>","difficulty":null}
//! {"op":"status","game_id":"<id>"}
//! ```
//!
//! Successful replies are [`GameView`]s; failures are `{"error", "kind"}`
//! objects and the loop keeps going.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::engine::{Difficulty, GameResult, GameView, SessionRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    New {
        difficulty: String,
    },
    Guess {
        game_id: String,
        letter: String,
    },
    Restart {
        game_id: String,
        #[serde(default)]
        difficulty: Option<String>,
    },
    Status {
        game_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Game(GameView),
    Error { error: String, kind: String },
}

impl Reply {
    fn bad_request(message: impl std::fmt::Display) -> Self {
        Reply::Error {
            error: message.to_string(),
            kind: "bad_request".to_string(),
        }
    }
}

impl From<GameResult<GameView>> for Reply {
    fn from(result: GameResult<GameView>) -> Self {
        match result {
            Ok(view) => Reply::Game(view),
            Err(e) => Reply::Error {
                error: e.to_string(),
                kind: e.kind().to_string(),
            },
        }
    }
}

/// Runs one request against the registry.
pub fn handle(registry: &SessionRegistry, request: Request) -> GameResult<GameView> {
    match request {
        Request::New { difficulty } => registry.create(Difficulty::parse(&difficulty)?),
        Request::Guess { game_id, letter } => registry.guess(&game_id, &letter),
        Request::Restart { game_id, difficulty } => {
            let difficulty = difficulty.as_deref().map(Difficulty::parse).transpose()?;
            registry.restart(&game_id, difficulty)
        }
        Request::Status { game_id } => registry.status(&game_id),
    }
}

/// Decodes and runs one line. `None` for blank lines.
pub fn handle_line(registry: &SessionRegistry, line: &str) -> Option<Reply> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let reply = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(?request, "request");
            Reply::from(handle(registry, request))
        }
        Err(e) => {
            warn!(error = %e, "malformed request");
            Reply::bad_request(e)
        }
    };
    Some(reply)
}

/// Serves requests from `reader` until end of input.
pub async fn serve<R, W>(registry: &SessionRegistry, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.split(b'\n');
    while let Some(bytes) = lines.next_segment().await? {
        let reply = match String::from_utf8(bytes) {
            Ok(line) => handle_line(registry, &line),
            Err(e) => {
                warn!(error = %e, "request is not valid UTF-8");
                Some(Reply::bad_request(e))
            }
        };
        if let Some(reply) = reply {
            let encoded = serde_json::to_string(&reply)?;
            writer.write_all(encoded.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }
    Ok(())
}

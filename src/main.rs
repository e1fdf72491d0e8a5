//! Terminal Block Blast runner (default binary).
//!
//! Reads configuration from `BLOCKBLAST_*` environment variables, logs to a
//! file (the terminal belongs to the game), and saves the score of every run
//! that ends in game over.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockblast::adapter::{GameSession, JsonFileScoreStore, ScoreReporter, SessionConfig};
use blockblast::input::{handle_key_event, should_quit, PlacementCursor};
use blockblast::term::{Feedback, FrameBuffer, GameView, Hud, Selection, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config);

    let content = config.load_content()?;
    let game_id = config.resolve_game_id(&content);
    let store = Arc::new(JsonFileScoreStore::new(&config.scores_path));
    let reporter = ScoreReporter::start(store)?;
    tracing::info!(scores = %config.scores_path.display(), "score file");

    let mut session = GameSession::new(
        config.seed,
        content.questions(),
        config.student_id.clone(),
        game_id,
        reporter,
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &content.title);

    // Always try to restore terminal state.
    let _ = term.exit();
    let saved = session.finish();
    tracing::info!(saved, "exiting");
    result
}

fn init_logging(config: &SessionConfig) {
    let file = match std::fs::File::create(&config.log_path) {
        Ok(f) => f,
        // No log file: keep running without logs rather than writing over the game.
        Err(_) => return,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession, title: &str) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut cursor = PlacementCursor::new();

    loop {
        let snap = session.state().snapshot();
        cursor.sync(&snap);

        let state = session.state();
        let feedback = session.last_answer().and_then(|a| {
            let q = state.questions().get(a.question_index)?;
            Some(Feedback {
                correct: a.correct,
                bonus: a.bonus,
                correct_option: q.correct_option(),
                explanation: q.explanation.as_deref(),
            })
        });
        let hud = Hud {
            title: Some(title),
            selection: Some(Selection {
                slot: cursor.slot as usize,
                row: cursor.row,
                col: cursor.col,
            }),
            question: state.active_question(),
            feedback,
        };

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Wake up periodically so a resize is picked up even without input.
        if !event::poll(Duration::from_millis(250)).context("failed to poll terminal events")? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(input) = handle_key_event(key, snap.quiz_phase) else {
                    continue;
                };
                if let Some(action) = cursor.apply(input, &snap) {
                    // Rejections are logged by the session; the board simply does not change.
                    let _ = session.handle(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

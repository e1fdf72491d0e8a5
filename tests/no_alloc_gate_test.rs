use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockblast::core::{GameSnapshot, GameState, Question};
use blockblast::term::{FrameBuffer, GameView, Hud, Selection, Viewport};
use blockblast::types::QuizPhase;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn pool() -> Vec<Question> {
    vec![Question::new(
        "q1",
        "What is 6 × 4?",
        vec!["20".into(), "22".into(), "24".into(), "26".into()],
        2,
    )]
}

#[test]
fn core_and_render_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1, pool());
    let view = GameView::default();
    let viewport = Viewport::new(100, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            if gs.game_over() {
                gs.restart();
            }
            if gs.quiz_phase() == QuizPhase::Presenting {
                let _ = gs.submit_answer(2);
            }

            // First fit for the first unused piece.
            let slot = gs.pieces().iter().position(|p| !p.used).unwrap_or(0);
            'search: for r in 0..8 {
                for c in 0..8 {
                    if gs.try_place(slot, r, c) {
                        break 'search;
                    }
                }
            }
            let _ = gs.take_last_event();

            gs.snapshot_into(&mut snap);
            let hud = Hud {
                title: Some("Basic Math Quiz"),
                selection: Some(Selection { slot: 0, row: 3, col: 3 }),
                question: gs.active_question(),
                feedback: None,
            };
            view.render_into(&snap, &hud, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}

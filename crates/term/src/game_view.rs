//! GameView: maps a `GameSnapshot` plus HUD state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot, Question};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, BATCH_SIZE, GRID_SIZE, QUIZ_INTERVAL};

const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(120, 120, 130);
const GOOD: Rgb = Rgb::new(0x2E, 0xCC, 0x71);
const BAD: Rgb = Rgb::new(0xE7, 0x4C, 0x3C);

/// Rows below the grid frame: slot labels, three shape rows, spacer, two feedback lines.
const TRAY_ROWS: u16 = 7;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Piece slot and anchor the player is aiming with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub slot: usize,
    pub row: i8,
    pub col: i8,
}

/// Result of the last answer, shown under the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub correct: bool,
    pub bonus: u32,
    pub correct_option: Option<&'a str>,
    pub explanation: Option<&'a str>,
}

/// Everything drawn besides the snapshot itself
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub title: Option<&'a str>,
    pub selection: Option<Selection>,
    /// The active question, when the quiz is presenting.
    pub question: Option<&'a Question>,
    pub feedback: Option<Feedback<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for the Block Blast board.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen geometry shared by the draw passes
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn tray_y(&self) -> u16 {
        self.y.saturating_add(self.frame_h)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame_w = GRID_SIZE as u16 * self.cell_w + 2;
        let frame_h = GRID_SIZE as u16 * self.cell_h + 2;
        let total_h = frame_h + TRAY_ROWS;
        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        };

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::fg(MUTED).on(GRID_BG),
        );
        fb.draw_box(layout.x, layout.y, frame_w, frame_h, CellStyle::fg(Rgb::new(200, 200, 200)));

        for (r, row) in snap.grid.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                match BlockColor::from_index(v) {
                    Some(color) => self.draw_block(fb, layout, r as u16, c as u16, color, '█'),
                    None => self.fill_grid_cell(
                        fb,
                        layout,
                        r as u16,
                        c as u16,
                        '·',
                        CellStyle::fg(Rgb::new(90, 90, 100)).on(GRID_BG).dim(),
                    ),
                }
            }
        }

        if snap.playable() {
            if let Some(sel) = hud.selection {
                self.draw_preview(fb, layout, snap, sel);
            }
        }

        self.draw_tray(fb, layout, snap, hud.selection);
        self.draw_feedback(fb, layout, hud.feedback);
        self.draw_side_panel(fb, layout, snap, hud.title, viewport);

        if snap.game_over {
            self.draw_game_over(fb, layout, snap);
        } else if let Some(q) = hud.question {
            self.draw_question(fb, layout, q, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn fill_grid_cell(&self, fb: &mut FrameBuffer, l: Layout, row: u16, col: u16, ch: char, style: CellStyle) {
        let px = l.x + 1 + col * self.cell_w;
        let py = l.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, l: Layout, row: u16, col: u16, color: BlockColor, ch: char) {
        let style = CellStyle::fg(block_rgb(color)).on(GRID_BG).bold();
        self.fill_grid_cell(fb, l, row, col, ch, style);
    }

    /// Selected piece at the cursor: shaded in its color when it fits, crossed
    /// out where it does not.
    fn draw_preview(&self, fb: &mut FrameBuffer, l: Layout, snap: &GameSnapshot, sel: Selection) {
        let Some(piece) = snap.pieces.get(sel.slot).filter(|p| !p.used) else {
            if in_grid(sel.row, sel.col) {
                let style = CellStyle::fg(TEXT).on(GRID_BG).bold();
                self.fill_grid_cell(fb, l, sel.row as u16, sel.col as u16, '+', style);
            }
            return;
        };

        let shape = get_shape(piece.kind);
        let fits = shape.iter().all(|&(dr, dc)| {
            let (r, c) = (sel.row.saturating_add(dr), sel.col.saturating_add(dc));
            in_grid(r, c) && snap.grid[r as usize][c as usize] == 0
        });

        for &(dr, dc) in shape {
            let (r, c) = (sel.row.saturating_add(dr), sel.col.saturating_add(dc));
            if !in_grid(r, c) {
                continue;
            }
            if fits {
                self.draw_block(fb, l, r as u16, c as u16, piece.color, '▒');
            } else {
                let style = CellStyle::fg(BAD).on(GRID_BG).bold();
                self.fill_grid_cell(fb, l, r as u16, c as u16, '×', style);
            }
        }
    }

    fn draw_tray(&self, fb: &mut FrameBuffer, l: Layout, snap: &GameSnapshot, sel: Option<Selection>) {
        // Widest shape is 3 cells at 2 columns each, plus the slot label.
        let slot_w = (l.frame_w / BATCH_SIZE as u16).max(9);
        let y = l.tray_y();

        for (i, piece) in snap.pieces.iter().enumerate() {
            let x = l.x + i as u16 * slot_w + 1;
            let selected = sel.map(|s| s.slot == i).unwrap_or(false);

            let label = if selected {
                CellStyle::fg(TEXT).bold()
            } else {
                CellStyle::fg(MUTED)
            };
            let mut cx = fb.put_str(x, y, if selected { "▶" } else { " " }, label);
            cx = fb.put_u32(cx, y, i as u32 + 1, label);
            if piece.used {
                fb.put_str(cx + 1, y, "used", CellStyle::fg(MUTED).dim());
                continue;
            }

            let style = CellStyle::fg(block_rgb(piece.color)).bold();
            for &(dr, dc) in get_shape(piece.kind) {
                let px = x + 1 + dc as u16 * 2;
                let py = y + 1 + dr as u16;
                fb.put_str(px, py, "██", style);
            }
        }
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, l: Layout, feedback: Option<Feedback<'_>>) {
        let Some(f) = feedback else {
            return;
        };
        let y = l.tray_y() + TRAY_ROWS - 2;
        let x = l.x + 1;

        if f.correct {
            let cx = fb.put_str(x, y, "Correct! +", CellStyle::fg(GOOD).bold());
            let cx = fb.put_u32(cx, y, f.bonus, CellStyle::fg(GOOD).bold());
            fb.put_str(cx, y, " points", CellStyle::fg(GOOD).bold());
        } else {
            let cx = fb.put_str(x, y, "Not quite.", CellStyle::fg(BAD).bold());
            if let Some(answer) = f.correct_option {
                let cx = fb.put_str(cx, y, " Answer: ", CellStyle::fg(TEXT));
                fb.put_str(cx, y, answer, CellStyle::fg(TEXT).bold());
            }
        }
        if let Some(text) = f.explanation {
            let line = WordWrap::new(text, l.frame_w.saturating_sub(2) as usize)
                .next()
                .unwrap_or("");
            fb.put_str(x, y + 1, line, CellStyle::fg(MUTED));
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        snap: &GameSnapshot,
        title: Option<&str>,
        viewport: Viewport,
    ) {
        let panel_x = l.x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::fg(TEXT).on(PANEL_BG).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200)).on(PANEL_BG);

        let mut y = l.y;
        if let Some(t) = title {
            fb.put_str(panel_x, y, t, CellStyle::fg(Rgb::new(0x34, 0x98, 0xDB)).bold());
            y = y.saturating_add(2);
        }

        for (name, v) in [("SCORE", snap.score), ("LINES", snap.lines), ("MOVES", snap.moves)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "STREAK", label);
        let cx = fb.put_u32(panel_x, y + 1, snap.question_streak, value);
        if snap.question_streak > 0 {
            let cx = fb.put_str(cx, y + 1, "  x", CellStyle::fg(GOOD));
            fb.put_u32(cx, y + 1, snap.question_streak.saturating_add(1), CellStyle::fg(GOOD));
        }
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "QUIZ IN", label);
        let until = QUIZ_INTERVAL - snap.moves % QUIZ_INTERVAL;
        fb.put_u32(panel_x, y + 1, until, value);
        y = y.saturating_add(3);

        let help = CellStyle::fg(MUTED).dim();
        for line in ["arrows move", "1-3 / tab piece", "enter place", "r restart  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_question(&self, fb: &mut FrameBuffer, l: Layout, q: &Question, viewport: Viewport) {
        let box_w = l.frame_w.max(30).min(viewport.width);
        let inner = box_w.saturating_sub(4) as usize;
        if inner == 0 {
            return;
        }

        let text_lines = WordWrap::new(&q.text, inner).count() as u16;
        let option_lines: u16 = q
            .options
            .iter()
            .map(|o| WordWrap::new(o, inner.saturating_sub(3)).count().max(1) as u16)
            .sum();
        // Header, spacer, text, spacer, options, spacer, hint, plus borders.
        let box_h = (text_lines + option_lines + 6).min(viewport.height);
        let x = l.x.saturating_sub(box_w.saturating_sub(l.frame_w) / 2);
        let y = l.y + l.frame_h.saturating_sub(box_h) / 2;

        let panel = CellStyle::fg(TEXT).on(Rgb::new(20, 24, 36));
        fb.fill_rect(x, y, box_w, box_h, ' ', panel);
        fb.draw_box(x, y, box_w, box_h, CellStyle::fg(Rgb::new(0xF3, 0x9C, 0x12)).on(panel.bg));

        let bottom = y + box_h.saturating_sub(1);
        let mut cy = y + 1;
        fb.put_str(x + 2, cy, "QUESTION", CellStyle::fg(Rgb::new(0xF3, 0x9C, 0x12)).on(panel.bg).bold());
        cy += 2;

        for line in WordWrap::new(&q.text, inner) {
            if cy >= bottom {
                return;
            }
            fb.put_str(x + 2, cy, line, panel.bold());
            cy += 1;
        }
        cy += 1;

        for (i, option) in q.options.iter().enumerate() {
            let mut first = true;
            for line in WordWrap::new(option, inner.saturating_sub(3)) {
                if cy >= bottom {
                    return;
                }
                if first {
                    let nx = fb.put_u32(x + 2, cy, i as u32 + 1, panel.bold());
                    fb.put_char(nx, cy, ')', panel.bold());
                    first = false;
                }
                fb.put_str(x + 5, cy, line, panel);
                cy += 1;
            }
        }
        if cy < bottom {
            fb.put_str(x + 2, bottom - 1, "press a number to answer", CellStyle::fg(MUTED).on(panel.bg));
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, l: Layout, snap: &GameSnapshot) {
        let box_w = 24.min(l.frame_w);
        let box_h = 10;
        let x = l.x + (l.frame_w - box_w) / 2;
        let y = l.y + l.frame_h.saturating_sub(box_h) / 2;

        let panel = CellStyle::fg(TEXT).on(Rgb::new(0, 0, 0));
        fb.fill_rect(x, y, box_w, box_h, ' ', panel);
        fb.draw_box(x, y, box_w, box_h, CellStyle::fg(BAD).bold());

        let center = |text_w: u16| x + box_w.saturating_sub(text_w) / 2;
        fb.put_str(center(9), y + 1, "GAME OVER", CellStyle::fg(BAD).bold());

        let results = [
            ("Score ", snap.score),
            ("Lines ", snap.lines),
            ("Moves ", snap.moves),
            ("Streak ", snap.question_streak),
        ];
        for (i, (label, value)) in results.into_iter().enumerate() {
            let row = y + 3 + i as u16;
            let w = label.len() as u16 + digit_count(value);
            let cx = fb.put_str(center(w), row, label, panel);
            fb.put_u32(cx, row, value, panel.bold());
        }

        fb.put_str(center(17), y + 8, "r restart  q quit", CellStyle::fg(MUTED));
    }
}

fn in_grid(row: i8, col: i8) -> bool {
    (0..GRID_SIZE as i8).contains(&row) && (0..GRID_SIZE as i8).contains(&col)
}

fn block_rgb(color: BlockColor) -> Rgb {
    Rgb::from_hex(color.hex()).unwrap_or(TEXT)
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// Greedy word wrap over `&str` slices, splitting overlong words.
struct WordWrap<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> WordWrap<'a> {
    fn new(text: &'a str, width: usize) -> Self {
        Self {
            rest: text,
            width: width.max(1),
        }
    }
}

impl<'a> Iterator for WordWrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        // Byte offset just past `width` chars, or the end of the text.
        let limit = rest
            .char_indices()
            .nth(self.width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if limit == rest.len() {
            self.rest = "";
            return Some(rest);
        }
        let split = match rest[..limit].rfind(' ') {
            Some(i) if i > 0 && !rest[limit..].starts_with(' ') => i,
            _ => limit,
        };
        self.rest = &rest[split..];
        Some(rest[..split].trim_end())
    }
}

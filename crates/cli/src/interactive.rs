//! The interactive board: key handling and the redraw loop

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use board_core::{BoardController, Reaction, ReactionChange, ReactionObserver, SortCriterion};
use console::{Key, Term};
use inquire::{InquireError, Select};

use crate::render::{self, Layout, ViewState};

/// What a key press asks the board to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refresh,
    Like,
    Dislike,
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    PickSort,
    NextSort,
    PreviousSort,
    Quit,
    Ignore,
}

impl Action {
    pub fn from_key(key: &Key) -> Self {
        match key {
            Key::Char('r') | Key::Char('R') => Action::Refresh,
            Key::UnknownEscSeq(seq) if is_f5(seq) => Action::Refresh,
            Key::Char('l') | Key::Char('+') => Action::Like,
            Key::Char('d') | Key::Char('-') => Action::Dislike,
            Key::ArrowUp | Key::Char('k') => Action::Up,
            Key::ArrowDown | Key::Char('j') => Action::Down,
            Key::PageUp => Action::PageUp,
            Key::PageDown | Key::Char(' ') => Action::PageDown,
            Key::Home | Key::Char('g') => Action::First,
            Key::End | Key::Char('G') => Action::Last,
            Key::Char('s') => Action::PickSort,
            Key::Tab => Action::NextSort,
            Key::BackTab => Action::PreviousSort,
            Key::Char('q') | Key::Escape => Action::Quit,
            _ => Action::Ignore,
        }
    }
}

// F5 is ESC [ 1 5 ~ on xterm-likes (the reader may stop before the '~')
// and ESC [ [ E on the Linux console.
fn is_f5(seq: &[char]) -> bool {
    matches!(seq, ['[', '1', '5'] | ['[', '1', '5', '~'] | ['[', '[', 'E'])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn describe(change: &ReactionChange) -> String {
    let verb = match (change.before, change.after) {
        (_, Reaction::Liked) => "Liked",
        (_, Reaction::Disliked) => "Disliked",
        (Reaction::Liked, Reaction::None) => "Removed like from",
        (Reaction::Disliked, Reaction::None) => "Removed dislike from",
        (Reaction::None, Reaction::None) => "Updated",
    };
    format!(
        "{} comment #{} (Likes: {}, Dislikes: {})",
        verb, change.comment_id, change.likes, change.dislikes
    )
}

/// Mirrors every reaction into the status line
struct StatusLine(Rc<RefCell<Option<String>>>);

impl ReactionObserver for StatusLine {
    fn reacted(&self, change: &ReactionChange) {
        *self.0.borrow_mut() = Some(describe(change));
    }
}

pub struct BoardApp {
    board: BoardController,
    view: ViewState,
    status: Rc<RefCell<Option<String>>>,
}

impl BoardApp {
    pub fn new(mut board: BoardController) -> Self {
        let status = Rc::new(RefCell::new(None));
        board.subscribe(Box::new(StatusLine(Rc::clone(&status))));

        Self {
            board,
            view: ViewState::default(),
            status,
        }
    }

    pub fn board(&self) -> &BoardController {
        &self.board
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    fn set_status(&self, message: impl Into<String>) {
        *self.status.borrow_mut() = Some(message.into());
    }

    fn selected_id(&self) -> Option<u64> {
        self.board.rows().get(self.view.selected).map(|row| row.comment_id())
    }

    pub fn refresh(&mut self) {
        let summary = self.board.refresh();
        self.view.reset();
        self.set_status(format!(
            "Refreshed: {} comments from {} users",
            summary.comments, summary.users
        ));
    }

    /// Re-sort, keeping the selection on the same comment
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        let selected = self.selected_id();
        self.board.sort_by(criterion);

        if let Some(id) = selected {
            if let Some(index) = self.board.rows().iter().position(|row| row.comment_id() == id) {
                self.view.selected = index;
            }
        }
        self.set_status(format!("Sorted by {}", criterion));
    }

    /// Apply one action against a screen of the given size
    pub fn apply(&mut self, action: Action, layout: Layout) -> Result<Flow> {
        let len = self.board.rows().len();
        let page = layout.blocks_fitting(&layout.block_heights(self.board.rows()), self.view.scroll);

        match action {
            Action::Refresh => self.refresh(),
            Action::Like => {
                if let Some(id) = self.selected_id() {
                    self.board.toggle_like(id)?;
                }
            }
            Action::Dislike => {
                if let Some(id) = self.selected_id() {
                    self.board.toggle_dislike(id)?;
                }
            }
            Action::Up => self.navigate(|view| view.select_previous()),
            Action::Down => self.navigate(|view| view.select_next(len)),
            Action::PageUp => self.navigate(|view| view.page_up(page)),
            Action::PageDown => self.navigate(|view| view.page_down(len, page)),
            Action::First => self.navigate(|view| view.select_first()),
            Action::Last => self.navigate(|view| view.select_last(len)),
            Action::NextSort => self.sort_by(self.board.criterion().next()),
            Action::PreviousSort => self.sort_by(self.board.criterion().previous()),
            Action::Quit => return Ok(Flow::Quit),
            Action::PickSort | Action::Ignore => {}
        }

        self.scroll_into_view(layout);
        Ok(Flow::Continue)
    }

    fn scroll_into_view(&mut self, layout: Layout) {
        let heights = layout.block_heights(self.board.rows());
        self.view.ensure_visible(&heights, layout.list_height());
    }

    fn navigate<F: FnOnce(&mut ViewState)>(&mut self, step: F) {
        step(&mut self.view);
        *self.status.borrow_mut() = None;
    }
}

/// Run the board until the user quits
pub fn run(term: &Term, app: &mut BoardApp) -> Result<()> {
    term.hide_cursor()?;
    let result = event_loop(term, app);
    term.show_cursor()?;
    term.clear_screen()?;
    result
}

fn event_loop(term: &Term, app: &mut BoardApp) -> Result<()> {
    loop {
        let (rows, cols) = term.size();
        let layout = Layout::new(cols as usize, rows as usize);
        app.scroll_into_view(layout);

        let lines = render::render_board(app.board(), app.view(), layout, app.status().as_deref());
        term.clear_screen()?;
        term.write_str(&lines.join("\n"))?;

        let key = term.read_key()?;
        let action = Action::from_key(&key);
        tracing::trace!(target: "board::input", ?key, ?action, "Key pressed");

        let flow = match action {
            Action::PickSort => {
                term.clear_screen()?;
                term.show_cursor()?;
                let picked = pick_sort(app.board().criterion());
                term.hide_cursor()?;
                if let Some(criterion) = picked? {
                    app.sort_by(criterion);
                }
                Flow::Continue
            }
            other => app.apply(other, layout)?,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

/// The "Sort by" selector. `None` when the user backs out.
fn pick_sort(current: SortCriterion) -> Result<Option<SortCriterion>> {
    let start = SortCriterion::ALL.iter().position(|c| *c == current).unwrap_or(0);

    match Select::new("Sort by:", SortCriterion::ALL.to_vec())
        .with_starting_cursor(start)
        .prompt()
    {
        Ok(criterion) => Ok(Some(criterion)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

//! Painting the board into terminal lines
//!
//! Rendering is pure: it turns the controller's rows into strings and
//! leaves writing them to the caller, so layout can be tested without a
//! terminal. Comment bodies wrap, so blocks differ in height and scrolling
//! is measured in lines.

use board_core::{BoardController, CommentRow, IconKind, IconSet, SortCriterion};
use console::{measure_text_width, pad_str, style, Alignment, Emoji};

/// Lines of a comment block besides its body
pub const BLOCK_CHROME: usize = 5;
pub const HEADER_HEIGHT: usize = 3;
pub const FOOTER_HEIGHT: usize = 1;
pub const MIN_WIDTH: usize = 40;

static LIKE_GLYPH: Emoji<'_, '_> = Emoji("👍 ", "+ ");
static DISLIKE_GLYPH: Emoji<'_, '_> = Emoji("👎 ", "- ");

/// Word-wrap `text` into lines at most `width` columns wide. Words longer
/// than a line are split. Always yields at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            measure_text_width(word)
        } else {
            measure_text_width(&current) + 1 + measure_text_width(word)
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if measure_text_width(&current) > width {
                current.pop();
                lines.push(std::mem::replace(&mut current, ch.to_string()));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Terminal size and the geometry derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
}

impl Layout {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height,
        }
    }

    fn inner_width(&self) -> usize {
        self.width - 4
    }

    /// Lines available to comment blocks
    pub fn list_height(&self) -> usize {
        self.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
    }

    pub fn block_height(&self, row: &CommentRow) -> usize {
        BLOCK_CHROME + wrap_text(row.body(), self.inner_width()).len()
    }

    pub fn block_heights(&self, rows: &[CommentRow]) -> Vec<usize> {
        rows.iter().map(|row| self.block_height(row)).collect()
    }

    /// How many blocks starting at `scroll` fit on screen; never less than one
    pub fn blocks_fitting(&self, heights: &[usize], scroll: usize) -> usize {
        let available = self.list_height();
        let mut used = 0;
        let mut count = 0;

        for height in heights.iter().skip(scroll) {
            if used + height > available && count > 0 {
                break;
            }
            used += height;
            count += 1;
        }
        count.max(1)
    }
}

/// Selection and scroll position of the list, both in blocks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub selected: usize,
    pub scroll: usize,
}

impl ViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self, len: usize, page: usize) {
        self.selected = (self.selected + page.max(1)).min(len.saturating_sub(1));
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page.max(1));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Scroll so the selected block lies within `available` lines, given
    /// every block's height
    pub fn ensure_visible(&mut self, heights: &[usize], available: usize) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
            return;
        }

        let span = |from: usize, to: usize| heights.get(from..=to).map_or(0, |h| h.iter().sum::<usize>());
        while self.scroll < self.selected && span(self.scroll, self.selected) > available {
            self.scroll += 1;
        }
    }
}

pub fn render_header(criterion: SortCriterion, comments: usize) -> Vec<String> {
    vec![
        format!(
            "{}  Sort by: {}   {}",
            style("[ Refresh (r/F5) ]").bold(),
            style(format!("[ {} ▾ ]", criterion)).cyan().bold(),
            style(format!("{} comments", comments)).dim()
        ),
        style("↑/↓ select  PgUp/PgDn page  l like  d dislike  s sort  Tab next sort  q quit")
            .dim()
            .to_string(),
        String::new(),
    ]
}

fn button(kind: IconKind, icons: &IconSet, active: bool) -> (String, String) {
    let (glyph, label) = match kind {
        IconKind::Like => (&LIKE_GLYPH, "Like"),
        IconKind::Dislike => (&DISLIKE_GLYPH, "Dislike"),
    };

    let plain = if icons.has(kind) {
        format!("[ {}{} ]", glyph, label)
    } else {
        format!("[ {} ]", label)
    };

    let styled = if active {
        style(&plain).reverse().bold().to_string()
    } else {
        plain.clone()
    };
    (plain, styled)
}

/// One comment as a boxed block; the body wraps inside the box
pub fn render_row(row: &CommentRow, icons: &IconSet, width: usize, selected: bool) -> Vec<String> {
    let width = width.max(MIN_WIDTH);
    let inner = width - 4;
    let edge = |s: &str| {
        if selected {
            style(s).cyan().bold().to_string()
        } else {
            style(s).dim().to_string()
        }
    };
    let fit = |text: &str| pad_str(text, inner, Alignment::Left, Some("…")).into_owned();
    let boxed = |text: String| format!("{} {} {}", edge("│"), text, edge("│"));

    let left = format!("┌─ {} ", row.title());
    let right = format!(" {} ─┐", row.date_label());
    let fill = width.saturating_sub(measure_text_width(&left) + measure_text_width(&right));
    let top = format!("{}{}{}", edge(left.as_str()), edge("─".repeat(fill).as_str()), edge(right.as_str()));

    let (like_plain, like) = button(IconKind::Like, icons, row.has_liked());
    let (dislike_plain, dislike) = button(IconKind::Dislike, icons, row.has_disliked());
    let used = measure_text_width(&like_plain) + 2 + measure_text_width(&dislike_plain);
    let buttons = format!("{}  {}{}", like, dislike, " ".repeat(inner.saturating_sub(used)));

    let counters = format!("{}   {}", row.likes_label(), row.dislikes_label());

    let mut lines = vec![top, boxed(style(fit(row.author())).bold().to_string())];
    lines.extend(wrap_text(row.body(), inner).iter().map(|line| boxed(fit(line.as_str()))));
    lines.push(boxed(fit(counters.as_str())));
    lines.push(boxed(buttons));
    lines.push(edge(format!("└{}┘", "─".repeat(width - 2)).as_str()));
    lines
}

/// The full screen: header, the blocks that fit, and a status line
pub fn render_board(board: &BoardController, view: &ViewState, layout: Layout, status: Option<&str>) -> Vec<String> {
    let rows = board.rows();
    let mut lines = render_header(board.criterion(), rows.len());

    let heights = layout.block_heights(rows);
    let visible = layout.blocks_fitting(&heights, view.scroll);
    for (index, row) in rows.iter().enumerate().skip(view.scroll).take(visible) {
        lines.extend(render_row(row, board.icons(), layout.width, index == view.selected));
    }

    let footer = match status {
        Some(message) => message.to_string(),
        None if rows.is_empty() => "No comments".to_string(),
        None => format!("Comment {} of {}", view.selected + 1, rows.len()),
    };
    lines.push(style(footer).dim().to_string());
    lines
}

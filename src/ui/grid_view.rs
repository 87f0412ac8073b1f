use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    group::Group,
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::table::TableStore;

const FALLBACK_CELL_WIDTH: i32 = 100;
const FALLBACK_CELL_HEIGHT: i32 = 30;
const MIN_FONT_SIZE: i32 = 8;
const WRAP_MARGIN: i32 = 10;

/// Per-cell sizing derived from the viewport and grid extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: i32,
    pub cell_height: i32,
    pub font_size: i32,
    pub wrap_width: i32,
}

impl CellMetrics {
    pub fn compute(viewport_w: i32, viewport_h: i32, rows: usize, cols: usize) -> CellMetrics {
        let cell_width = if cols > 0 {
            viewport_w / cols as i32
        } else {
            FALLBACK_CELL_WIDTH
        };
        let cell_height = if rows > 0 {
            viewport_h / rows as i32
        } else {
            FALLBACK_CELL_HEIGHT
        };
        CellMetrics {
            cell_width,
            cell_height,
            font_size: (cell_height.min(cell_width) / 3).max(MIN_FONT_SIZE),
            wrap_width: cell_width - WRAP_MARGIN,
        }
    }
}

struct CellHandle {
    row: usize,
    col: usize,
    button: Button,
}

/// Presentation of the grid: one button per cell inside a host group.
///
/// The handles here are rebuilt on every full redraw and are never
/// authoritative; the `TableStore` is.
pub struct GridView {
    group: Group,
    cells: Vec<CellHandle>,
    rows: usize,
    cols: usize,
}

impl GridView {
    pub fn new(group: Group) -> GridView {
        GridView {
            group,
            cells: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Drop every existing cell widget and rebuild the grid from the table.
    ///
    /// Row 0 and column 0 are drawn as disabled header labels; body cells
    /// send `Message::CellClicked` with their own coordinates captured by
    /// value, so there is no shared click state between cells.
    pub fn full_redraw(&mut self, table: &TableStore, sender: &Sender<Message>) {
        self.group.clear();
        self.cells.clear();
        self.rows = table.rows();
        self.cols = table.cols();

        self.group.begin();
        for (row, cells) in table.grid().iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                let mut button = Button::new(0, 0, 0, 0, None);
                button.set_label(value);
                button.set_frame(FrameType::BorderBox);
                button.clear_visible_focus();

                let bg = if row == 0 {
                    Color::from_rgb(169, 169, 169)
                } else if col == 0 {
                    Color::from_rgb(211, 211, 211)
                } else {
                    Color::White
                };
                button.set_color(bg);
                button.set_selection_color(bg);

                if row == 0 || col == 0 {
                    button.set_label_color(Color::Black);
                    button.deactivate();
                } else {
                    let s = *sender;
                    button.set_callback(move |_| s.send(Message::CellClicked(row, col)));
                }

                self.cells.push(CellHandle { row, col, button });
            }
        }
        self.group.end();

        self.rescale();
    }

    /// Re-apply geometry, font size and wrap to the existing cell widgets.
    /// No-op until a grid has been drawn.
    pub fn rescale(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        let metrics = CellMetrics::compute(self.group.w(), self.group.h(), self.rows, self.cols);
        let (gx, gy) = (self.group.x(), self.group.y());

        for cell in &mut self.cells {
            let x = gx + cell.col as i32 * metrics.cell_width;
            let y = gy + cell.row as i32 * metrics.cell_height;
            cell.button
                .resize(x, y, metrics.cell_width, metrics.cell_height);
            cell.button.set_label_size(metrics.font_size);
            // fltk wraps at the widget box, so a non-positive wrap width
            // means the label no longer fits on any line at all.
            if metrics.wrap_width > 0 {
                cell.button
                    .set_align(Align::Inside | Align::Center | Align::Wrap);
            } else {
                cell.button.set_align(Align::Inside | Align::Center);
            }
        }
        self.group.redraw();
    }
}

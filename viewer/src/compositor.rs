use engine::graphics::Renderer2d;

use crate::{
    cell::{
        BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH, Cell, PREVIEW_CELLS, PREVIEW_HEIGHT,
        PREVIEW_WIDTH, board_index, preview_index,
    },
    geometry::{GridGeometry, PREVIEW_FIRST_ROW, Region},
    model::Model,
    palette::Theme,
};

/// The three layers one frame is composited from, borrowed for the duration of a render.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub board: &'a [Cell],
    pub active: &'a [Cell],
    pub next: &'a [Cell],
}

impl<'a> FrameView<'a> {
    pub fn from_model<M: Model + ?Sized>(model: &'a M) -> Self {
        Self {
            board: model.board(),
            active: model.active_piece(),
            next: model.next_piece(),
        }
    }
}

/// Draws the board surface: background, cells, gridlines, preview panel and frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardCompositor {
    geometry: GridGeometry,
    theme: Theme,
}

impl BoardCompositor {
    pub fn new(geometry: GridGeometry, theme: Theme) -> Self {
        Self { geometry, theme }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn render_model<M: Model + ?Sized>(&self, gfx: &mut dyn Renderer2d, model: &M) {
        self.render(gfx, &FrameView::from_model(model));
    }

    /// Paints one full frame. Sequences of the wrong length are tolerated: missing cells
    /// read as empty and extra cells are ignored.
    pub fn render(&self, gfx: &mut dyn Renderer2d, frame: &FrameView<'_>) {
        check_len("board", frame.board, BOARD_CELLS);
        check_len("active piece", frame.active, BOARD_CELLS);
        check_len("next piece", frame.next, PREVIEW_CELLS);

        let theme = &self.theme;
        let geo = &self.geometry;

        gfx.fill_rect(geo.surface_rect(), theme.background);

        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let i = board_index(row, col);
                let color = theme.resolve(cell_at(frame.board, i), cell_at(frame.active, i));
                if color == theme.background {
                    continue;
                }
                gfx.fill_rect(geo.cell_rect(Region::Board, row, col), color);
            }
        }

        for line in geo.board_gridlines() {
            gfx.stroke_line(line, theme.grid);
        }

        for row in PREVIEW_FIRST_ROW..PREVIEW_HEIGHT {
            for col in 0..PREVIEW_WIDTH {
                let overlay = cell_at(frame.next, preview_index(row, col));
                let color = theme.resolve(Cell::Empty, overlay);
                gfx.fill_rect(geo.cell_rect(Region::Preview, row, col), color);
            }
        }

        for line in geo.preview_gridlines() {
            gfx.stroke_line(line, theme.grid);
        }

        for bar in geo.frame_rects() {
            gfx.fill_rect(bar, theme.frame);
        }
    }
}

fn cell_at(cells: &[Cell], index: usize) -> Cell {
    cells.get(index).copied().unwrap_or(Cell::Empty)
}

fn check_len(layer: &str, cells: &[Cell], expected: usize) {
    if cells.len() != expected {
        tracing::warn!(
            layer,
            len = cells.len(),
            expected,
            "model returned a malformed layer; missing cells render as empty"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{graphics::pixel_at, surface::SurfaceSize};

    use crate::cell::PieceKind;

    fn render_to_vec(compositor: &BoardCompositor, frame: &FrameView<'_>) -> (Vec<u8>, SurfaceSize) {
        let size = compositor.geometry().surface_size();
        let mut buf = vec![0u8; size.rgba_len()];
        let mut gfx = engine::graphics::CpuRenderer::new(&mut buf, size);
        compositor.render(&mut gfx, frame);
        (buf, size)
    }

    #[test]
    fn short_layers_render_as_empty() {
        let compositor = BoardCompositor::new(GridGeometry::new(4), Theme::DEFAULT);
        let board = [Cell::Piece(PieceKind::O)];
        let frame = FrameView {
            board: &board,
            active: &[],
            next: &[],
        };
        let (buf, size) = render_to_vec(&compositor, &frame);

        let first = compositor.geometry().cell_rect(Region::Board, 0, 0);
        let second = compositor.geometry().cell_rect(Region::Board, 0, 1);
        assert_eq!(
            pixel_at(&buf, size, first.x + 2, first.y + 2),
            Some(Theme::DEFAULT.terrain.o)
        );
        assert_eq!(
            pixel_at(&buf, size, second.x + 2, second.y + 2),
            Some(Theme::DEFAULT.background)
        );
    }
}

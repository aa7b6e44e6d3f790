//! Rendering tests: board geometry read back from the screen buffer.

use tui_2048::core::{Board, SimpleRng};
use tui_2048::term::{
    frame_size, tile_style, tile_text_position, BoardView, Cell, CellStyle, Rgb, ScreenBuffer,
    Viewport, FALLBACK_TILE_STYLE,
};
use tui_2048::types::{BoxSize, Tile};

fn classic(rows: &[&[Tile]]) -> Board {
    Board::from_rows(rows, BoxSize::new(6, 3), SimpleRng::new(1)).unwrap()
}

fn render(board: &Board, offset: (i32, i32)) -> ScreenBuffer {
    let mut screen = ScreenBuffer::new(80, 24, ' ').unwrap();
    BoardView::default().render(board, &mut screen, offset);
    screen
}

#[test]
fn tile_values_read_back_at_their_centres() {
    let b = classic(&[
        &[2, 4, 8, 16],
        &[32, 64, 128, 256],
        &[512, 1024, 2048, 4096],
        &[0, 2, 0, 65536],
    ]);
    let screen = render(&b, (0, 0));

    for (x, y, value) in b.tiles() {
        let digits = value.to_string();
        let pos = tile_text_position(b.box_size(), x, y, value);
        assert_eq!(
            screen.text_at(pos, digits.len()),
            digits,
            "tile ({}, {})",
            x,
            y
        );
        assert_eq!(screen.get(pos.0, pos.1).unwrap().style, tile_style(value));
    }
}

#[test]
fn classic_frame_outline() {
    let b = classic(&[&[0; 4], &[0; 4], &[0; 4], &[0; 4]]);
    assert_eq!(frame_size(b.size(), b.box_size()), (29, 17));

    let screen = render(&b, (0, 0));
    assert_eq!(&screen.row_text(0)[..29], "/------+------+------+------\\");
    assert_eq!(&screen.row_text(1)[..29], "|      |      |      |      |");
    assert_eq!(&screen.row_text(4)[..29], "|------+------+------+------|");
    assert_eq!(&screen.row_text(8)[..29], "|------+------+------+------|");
    assert_eq!(&screen.row_text(12)[..29], "|------+------+------+------|");
    assert_eq!(&screen.row_text(16)[..29], "\\------+------+------+------/");
    assert_eq!(screen.row_text(17).trim(), "");
}

#[test]
fn board_offset_shifts_everything() {
    let b = classic(&[&[2, 0, 0, 0], &[0; 4], &[0; 4], &[0; 4]]);
    let screen = render(&b, (5, 2));
    assert_eq!(screen.get(5, 2).unwrap().ch, '/');
    let (x, y) = tile_text_position(b.box_size(), 0, 0, 2);
    assert_eq!(screen.get(5 + x, 2 + y).unwrap().ch, '2');
    assert_eq!(screen.get(4, 2).unwrap().ch, ' ');
}

#[test]
fn render_text_clips_past_the_right_edge() {
    let mut screen = ScreenBuffer::new(5, 2, '.').unwrap();
    let style = CellStyle::new(Some(Rgb::new(255, 0, 0)), None, false);
    screen.render_text("abcdefgh", (3, 1), style);

    assert_eq!(screen.row_text(0), ".....");
    assert_eq!(screen.row_text(1), "...ab");
    assert_eq!(screen.get(2, 1), Some(Cell::plain('.')));
    assert_eq!(screen.get(4, 1).unwrap().style, style);
}

#[test]
fn small_screen_clips_the_board() {
    let b = classic(&[&[2, 4, 8, 16], &[0; 4], &[0; 4], &[0; 4]]);
    let mut screen = ScreenBuffer::new(10, 3, ' ').unwrap();
    BoardView::default().render(&b, &mut screen, (0, 0));
    assert_eq!(screen.row_text(0), "/------+--");
    assert_eq!(screen.row_text(2), "|  2   |  ");
}

#[test]
fn flush_composites_at_offset() {
    let b = classic(&[&[2]]);
    let (w, h) = frame_size(b.size(), b.box_size());
    let mut screen = ScreenBuffer::new(w, h, ' ').unwrap();
    BoardView::default().render(&b, &mut screen, (0, 0));
    screen.set_offset(3, 1);

    let lines = screen.flush(Viewport::new(20, 8));
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], " ".repeat(20));
    assert!(lines[1].starts_with("   "));
    assert!(lines[1].contains('/'));
    assert!(lines[3].contains('2'));
    assert_eq!(lines[7], " ".repeat(20));
}

#[test]
fn oversized_tiles_use_fallback_style() {
    let b = classic(&[&[8192]]);
    let screen = render(&b, (0, 0));
    let pos = tile_text_position(b.box_size(), 0, 0, 8192);
    assert_eq!(screen.text_at(pos, 4), "8192");
    assert_eq!(screen.get(pos.0, pos.1).unwrap().style, FALLBACK_TILE_STYLE);
}

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::*;

fn default_keymap() -> Rc<PaneKeymap> {
    let config = quadview_config::AppConfig::default();
    Rc::new(PaneKeymap::from_config(&config.keybindings.pane))
}

fn sample_pane(row_count: usize) -> TablePane {
    let rows = (1..=row_count).map(|i| vec![i.to_string(), format!("name-{i}")]).collect();
    let mut pane = TablePane::new("Users", vec![Column::new("ID", 4), Column::new("Name", 10)], rows, default_keymap());
    pane.set_height(5);
    pane.set_width(20);
    pane.focus();
    pane
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn buf_line(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>().trim_end().to_string()
}

#[test]
fn visible_rows_exclude_header() {
    let pane = sample_pane(8);
    assert_eq!(pane.visible_rows(), 3);
}

#[test]
fn visible_rows_never_zero() {
    let mut pane = sample_pane(8);
    pane.set_height(0);
    assert_eq!(pane.visible_rows(), 1);
}

#[test]
fn line_down_scrolls_once_cursor_leaves_window() {
    let mut pane = sample_pane(8);
    for _ in 0..3 {
        pane.handle_key(press(KeyCode::Char('j')));
    }
    assert_eq!(pane.cursor(), 3);
    assert_eq!(pane.offset(), 1);
}

#[test]
fn cursor_clamps_at_both_ends() {
    let mut pane = sample_pane(8);
    pane.handle_key(press(KeyCode::Up));
    assert_eq!(pane.cursor(), 0);
    for _ in 0..20 {
        pane.handle_key(press(KeyCode::Down));
    }
    assert_eq!(pane.cursor(), 7);
    assert_eq!(pane.offset(), 5);
}

#[test]
fn page_and_half_page_moves() {
    let mut pane = sample_pane(8);
    pane.handle_key(press(KeyCode::PageDown));
    assert_eq!(pane.cursor(), 3);
    pane.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(pane.cursor(), 4);
    pane.handle_key(press(KeyCode::Char('b')));
    assert_eq!(pane.cursor(), 1);
    pane.handle_key(press(KeyCode::Char('u')));
    assert_eq!(pane.cursor(), 0);
}

#[test]
fn goto_bottom_and_top() {
    let mut pane = sample_pane(8);
    pane.handle_key(press(KeyCode::Char('G')));
    assert_eq!(pane.cursor(), 7);
    assert_eq!(pane.offset(), 5);
    pane.handle_key(press(KeyCode::Home));
    assert_eq!(pane.cursor(), 0);
    assert_eq!(pane.offset(), 0);
}

#[test]
fn shifted_g_as_terminals_report_it_goes_to_bottom() {
    let mut pane = sample_pane(20);
    pane.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
    assert_eq!(pane.cursor(), 19);
    assert_eq!(pane.offset(), 17);
    pane.handle_key(press(KeyCode::Char('g')));
    assert_eq!(pane.cursor(), 0);
}

#[test]
fn ctrl_d_with_shift_still_half_pages() {
    let mut pane = sample_pane(20);
    pane.handle_key(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    assert_eq!(pane.cursor(), 1);
}

#[test]
fn unfocused_pane_ignores_keys() {
    let mut pane = sample_pane(8);
    pane.blur();
    pane.handle_key(press(KeyCode::Char('j')));
    pane.handle_key(press(KeyCode::End));
    assert_eq!(pane.cursor(), 0);
}

#[test]
fn unbound_key_is_ignored() {
    let mut pane = sample_pane(8);
    pane.handle_key(press(KeyCode::Char('z')));
    assert_eq!(pane.cursor(), 0);
}

#[test]
fn growing_height_pulls_offset_back() {
    let mut pane = sample_pane(8);
    pane.handle_command(PaneCommand::GotoBottom);
    assert_eq!(pane.offset(), 5);
    pane.set_height(12);
    assert_eq!(pane.offset(), 0);
    assert_eq!(pane.cursor(), 7);
}

#[test]
fn shrinking_height_keeps_cursor_visible() {
    let mut pane = sample_pane(8);
    pane.set_height(10);
    pane.handle_command(PaneCommand::GotoBottom);
    assert_eq!(pane.offset(), 0);
    pane.set_height(4);
    assert_eq!(pane.visible_rows(), 2);
    assert_eq!(pane.offset(), 6);
}

#[test]
fn empty_table_navigation_is_harmless() {
    let mut pane = sample_pane(0);
    pane.handle_command(PaneCommand::LineDown);
    pane.handle_command(PaneCommand::GotoBottom);
    pane.handle_command(PaneCommand::PageUp);
    assert_eq!(pane.cursor(), 0);
    assert_eq!(pane.offset(), 0);
}

#[test]
fn focus_and_blur_toggle_flag() {
    let mut pane = sample_pane(1);
    assert!(pane.is_focused());
    pane.blur();
    assert!(!pane.is_focused());
}

#[test]
fn render_shows_header_rule_and_window() {
    let mut pane = sample_pane(8);
    pane.handle_command(PaneCommand::LineDown);
    pane.handle_command(PaneCommand::LineDown);
    pane.handle_command(PaneCommand::LineDown);
    let theme = Theme::default();

    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal.draw(|frame| pane.render(frame, frame.area(), &theme)).unwrap();
    let buf = terminal.backend().buffer();

    assert_eq!(buf_line(buf, 0), "ID   Name");
    assert!(buf_line(buf, 1).starts_with("────"));
    assert_eq!(buf_line(buf, 2), "2    name-2");
    assert_eq!(buf_line(buf, 4), "4    name-4");
    // height 5 bounds the drawing even though the area is taller
    assert_eq!(buf_line(buf, 5), "");
    // width 20 bounds the rule
    assert_eq!(buf[(20, 1)].symbol(), " ");
    assert_eq!(buf[(0, 4)].fg, theme.selection.fg.unwrap());
}

#[test]
fn render_empty_table_shows_placeholder() {
    let pane = sample_pane(0);
    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
    terminal.draw(|frame| pane.render(frame, frame.area(), &theme)).unwrap();
    assert_eq!(buf_line(terminal.backend().buffer(), 2), "No rows");
}

//! 대화형 메뉴 입력 처리 테스트.
use std::io::{Cursor, ErrorKind};

use heat_pump_roi_toolbox::app::AppError;
use heat_pump_roi_toolbox::i18n::{keys, Translator};
use heat_pump_roi_toolbox::ui_cli::{read_line_from, select_menu, MenuChoice};

#[test]
fn closed_input_exits_menu() {
    let tr = Translator::new("en-us");
    let choice = select_menu(&tr, &mut Cursor::new("")).expect("menu");
    assert_eq!(choice, MenuChoice::Exit);
}

#[test]
fn invalid_selections_stop_at_end_of_input() {
    let tr = Translator::new("en-us");
    let choice = select_menu(&tr, &mut Cursor::new("x\n9\n")).expect("menu");
    assert_eq!(choice, MenuChoice::Exit);

    let choice = select_menu(&tr, &mut Cursor::new("x\n 2 \n")).expect("menu");
    assert_eq!(choice, MenuChoice::Catalog);
}

#[test]
fn read_line_reports_end_of_input() {
    let mut input = Cursor::new("42\n");
    assert_eq!(read_line_from(&mut input, "> ").expect("line"), "42\n");
    match read_line_from(&mut input, "> ") {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected eof, got {other:?}"),
    }
}

#[test]
fn error_prefix_follows_language() {
    assert_eq!(Translator::new("en-us").t(keys::ERROR_PREFIX), "Error");
    assert_eq!(Translator::new("ko").t(keys::ERROR_PREFIX), "오류");
}

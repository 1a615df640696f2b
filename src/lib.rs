//! 급탕 히트펌프 사이징/투자 회수 계산 로직을 라이브러리로 분리하여 CLI 외 화면에서도 재사용한다.

pub mod app;
pub mod config;
pub mod heat_pump;
pub mod i18n;
pub mod ui_cli;

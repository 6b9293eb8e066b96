//! 연료 원소 분석값(사용 상태 기준)으로부터 건조·가연 기준 조성과 저위 발열량을 구한다.
//! 핵심 계산 로직을 라이브러리로 분리하여 웹 서버와 CLI가 함께 사용한다.

pub mod app;
pub mod config;
pub mod fuel;
pub mod measurement;
pub mod ui_cli;
pub mod web;

use log::info;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::heat_pump::economics::{project_economics, ProjectEconomicsInput};
use crate::heat_pump::{
    calculate_heat_pump_with_fx, CalculationError, CalculationInput, CatalogError,
    CatalogProvider, FileCatalog,
};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 카탈로그 로드 오류
    Catalog(CatalogError),
    /// 사이징 계산 오류
    Calculation(CalculationError),
    /// 시나리오 파일 파싱 오류
    Scenario(toml::de::Error),
    /// JSON 출력 오류
    Json(serde_json::Error),
    /// 카탈로그 경로 미지정
    MissingCatalog,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
            AppError::Calculation(e) => write!(f, "{e}"),
            AppError::Scenario(e) => write!(f, "시나리오 파싱 오류: {e}"),
            AppError::Json(e) => write!(f, "JSON 출력 오류: {e}"),
            AppError::MissingCatalog => write!(f, "카탈로그 파일 경로가 없습니다."),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

impl From<CalculationError> for AppError {
    fn from(value: CalculationError) -> Self {
        AppError::Calculation(value)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::Scenario(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// `--catalog` 인자가 있으면 그것을, 없으면 설정의 카탈로그 경로를 쓴다.
pub fn resolve_catalog(config: &Config, cli_path: Option<&Path>) -> Result<FileCatalog, AppError> {
    cli_path
        .map(FileCatalog::new)
        .or_else(|| config.catalog_path.as_deref().map(FileCatalog::new))
        .ok_or(AppError::MissingCatalog)
}

/// 시나리오 파일(TOML) 하나를 계산해 보고서 또는 JSON으로 출력한다.
pub fn run_scenario(
    config: &Config,
    tr: &Translator,
    scenario: &Path,
    catalog: Option<&Path>,
    json: bool,
) -> Result<(), AppError> {
    let content = fs::read_to_string(scenario)?;
    let input: CalculationInput = toml::from_str(&content)?;
    let candidates = resolve_catalog(config, catalog)?.load()?;
    info!(
        "Sizing scenario {} against {} candidates",
        scenario.display(),
        candidates.len()
    );
    let result = calculate_heat_pump_with_fx(&input, &candidates, &config.fx_rates())?;
    let economics = project_economics(ProjectEconomicsInput::from_result(
        &result,
        config.economics.discount_rate,
        config.economics.years,
    ));
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui_cli::print_result(tr, &result, &economics);
    }
    Ok(())
}

/// 카탈로그를 읽어 목록을 출력한다.
pub fn list_catalog(config: &Config, tr: &Translator, catalog: Option<&Path>) -> Result<(), AppError> {
    let products = resolve_catalog(config, catalog)?.load()?;
    ui_cli::print_catalog(tr, &products);
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정은 메뉴를 나갈 때 `config_path`에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Sizing => {
                // 계산 실패는 메뉴로 돌아가고, 입출력 오류만 루프를 끝낸다
                if let Err(e) = ui_cli::handle_sizing(tr, config) {
                    match e {
                        AppError::Io(_) => return Err(e),
                        other => println!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
                    }
                }
            }
            MenuChoice::Catalog => {
                if let Err(e) = ui_cli::handle_catalog(tr, config) {
                    println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

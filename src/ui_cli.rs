use std::io::{self, BufRead, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::heat_pump::constants::default_rate;
use crate::heat_pump::economics::{project_economics, ProjectEconomicsInput, ProjectEconomicsResult};
use crate::heat_pump::{
    calculate_heat_pump_with_fx, CalculationInput, CalculationResult, CandidateProduct,
    CatalogProvider, Currency, FileCatalog, HeatPumpFilter, HeatingType, SystemType, UserType,
};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sizing,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIZING));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    select_menu(tr, &mut io::stdin().lock())
}

/// 메뉴 번호를 읽는다. 입력이 끝났으면 종료로 본다.
pub fn select_menu<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, &tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Sizing),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 사이징 메뉴를 처리한다. 빈 입력은 지역 기본값을 쓴다.
pub fn handle_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIZING_HEADING));
    let Some(path) = cfg.catalog_path.as_deref() else {
        println!("{}", tr.t(keys::ERROR_NO_CATALOG));
        return Ok(());
    };
    let catalog = FileCatalog::new(path);

    let mut input = CalculationInput {
        currency: cfg.currency,
        ..CalculationInput::default()
    };

    println!("{}", tr.t(keys::SIZING_USER_TYPE_OPTIONS));
    input.user_type = match read_line(&tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => UserType::Home,
        "2" => UserType::Restaurant,
        "3" => UserType::Resort,
        _ => UserType::Custom,
    };
    match input.user_type {
        UserType::Home => input.occupants = read_f64_or(tr, keys::PROMPT_OCCUPANTS, 4.0)?,
        UserType::Restaurant => input.meals_per_day = read_f64_or(tr, keys::PROMPT_MEALS, 100.0)?,
        UserType::Resort => {
            input.rooms_occupied = read_f64_or(tr, keys::PROMPT_ROOMS, 10.0)?;
            input.meals_per_day = read_f64_or(tr, keys::PROMPT_MEALS, 50.0)?;
        }
        UserType::Custom => {
            input.daily_liters_input = read_f64_or(tr, keys::PROMPT_DAILY_LITERS, 500.0)?
        }
    }
    input.hours_per_day = read_f64_or(tr, keys::PROMPT_HOURS_PER_DAY, input.hours_per_day)?;

    println!("{}", tr.t(keys::SIZING_HEATING_OPTIONS));
    input.heating_type = match read_line(&tr.t(keys::PROMPT_SELECT))?.trim() {
        "2" => HeatingType::Propane,
        "3" => HeatingType::Gas,
        "4" => HeatingType::Diesel,
        _ => HeatingType::Electric,
    };
    let defaults = input.clone().with_regional_defaults(cfg.currency);
    input.fuel_price = read_f64_or(tr, keys::PROMPT_FUEL_PRICE, defaults.fuel_price)?;
    if input.heating_type == HeatingType::Propane {
        input.lpg_size = read_f64_or(tr, keys::PROMPT_LPG_SIZE, defaults.lpg_size)?;
    }
    input.elec_rate = read_f64_or(tr, keys::PROMPT_ELEC_RATE, default_rate(cfg.currency).grid)?;

    println!("{}", tr.t(keys::SIZING_SYSTEM_OPTIONS));
    input.system_type = match read_line(&tr.t(keys::PROMPT_SELECT))?.trim() {
        "2" => SystemType::GridSolar,
        _ => SystemType::GridOnly,
    };
    if input.system_type == SystemType::GridSolar {
        input.sun_hours = read_f64_or(tr, keys::PROMPT_SUN_HOURS, input.sun_hours)?;
    }

    input.ambient_temp = read_f64_or(tr, keys::PROMPT_AMBIENT_TEMP, input.ambient_temp)?;
    input.inlet_temp = read_f64_or(tr, keys::PROMPT_INLET_TEMP, input.inlet_temp)?;
    input.target_temp = read_f64_or(tr, keys::PROMPT_TARGET_TEMP, input.target_temp)?;

    let filter = read_line(&format!("{}: ", tr.t(keys::PROMPT_HEAT_PUMP_TYPE)))?;
    input.heat_pump_type = match filter.trim() {
        "" => HeatPumpFilter::All,
        other => HeatPumpFilter::parse(other),
    };
    let cooling = read_line(&format!("{}: ", tr.t(keys::PROMPT_INCLUDE_COOLING)))?;
    input.include_cooling = matches!(cooling.trim(), "y" | "Y" | "yes");

    let candidates = catalog.load()?;
    let result = calculate_heat_pump_with_fx(&input, &candidates, &cfg.fx_rates())?;
    let economics = project_economics(ProjectEconomicsInput::from_result(
        &result,
        cfg.economics.discount_rate,
        cfg.economics.years,
    ));
    print_result(tr, &result, &economics);
    Ok(())
}

/// 카탈로그 메뉴를 처리한다.
pub fn handle_catalog(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    app::list_catalog(cfg, tr, None)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.currency.code(),
        cfg.catalog_path.as_deref().unwrap_or("-"),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_CURRENCY_OPTIONS));
            let choice = read_line(&tr.t(keys::PROMPT_SELECT))?;
            let currency = match choice.trim() {
                "1" => Some(Currency::PHP),
                "2" => Some(Currency::USD),
                "3" => Some(Currency::GBP),
                "4" => Some(Currency::EUR),
                other => Currency::from_code(other),
            };
            match currency {
                Some(c) => cfg.currency = c,
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            let path = read_line(&tr.t(keys::PROMPT_CATALOG_PATH))?;
            let path = path.trim();
            cfg.catalog_path = if path.is_empty() {
                None
            } else {
                Some(path.to_string())
            };
        }
        "3" => {
            let lang = read_line(&tr.t(keys::PROMPT_LANGUAGE))?;
            cfg.language = lang.trim().to_string();
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 사이징 결과와 장기 경제성을 출력한다.
pub fn print_result(tr: &Translator, result: &CalculationResult, economics: &ProjectEconomicsResult) {
    let fin = &result.financials;
    let sym = fin.symbol;
    println!(
        "{} {} ({}, {:.0} USD)",
        tr.t(keys::RESULT_SELECTED_MODEL),
        result.system.display_name(),
        result.system.kind,
        result.system.sales_price_usd
    );
    println!(
        "{} {:.0} L/h",
        tr.t(keys::RESULT_ADJ_FLOW),
        result.metrics.adj_flow_lhr
    );
    println!("{} {sym}{:.2}", tr.t(keys::RESULT_ANNUAL_OLD), fin.annual_cost_old);
    println!(
        "{} {sym}{:.2}",
        tr.t(keys::RESULT_ANNUAL_HEAT_PUMP),
        fin.annual_karnot_cost
    );
    if fin.cool_savings > 0.0 {
        println!("{} {sym}{:.2}", tr.t(keys::RESULT_COOL_SAVINGS), fin.cool_savings);
    }
    println!("{} {sym}{:.2}", tr.t(keys::RESULT_TOTAL_SAVINGS), fin.total_savings);
    println!("{} {sym}{:.2}", tr.t(keys::RESULT_CAPEX), fin.capex.total);
    println!("{} {}", tr.t(keys::RESULT_PAYBACK), fin.payback_years);
    if result.metrics.panels != 0 {
        println!("{} {}", tr.t(keys::RESULT_PANELS), result.metrics.panels);
    }
    println!(
        "{} {:.0}",
        tr.t(keys::RESULT_EMISSIONS),
        result.metrics.emissions_saved
    );
    println!("{} {sym}{:.2}", tr.t(keys::RESULT_NPV), economics.npv);
}

/// 카탈로그 목록을 출력한다.
pub fn print_catalog(tr: &Translator, products: &[CandidateProduct]) {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    if products.is_empty() {
        println!("{}", tr.t(keys::CATALOG_EMPTY));
        return;
    }
    for p in products {
        println!(
            "{:<28} {:<6} {:>6.0} L/h  {:>4.0}°C  COP {:.2}  {:>8.0} USD{}",
            p.display_name(),
            p.kind,
            p.base_lhr,
            p.max_temp_c,
            p.cop_dhw,
            p.sales_price_usd,
            if p.is_reversible { "  (cooling)" } else { "" }
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 0바이트(입력 끝)는 `UnexpectedEof`이다.
pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    Ok(buf)
}

/// 숫자를 읽는다. 빈 입력이면 `default`를 반환한다.
fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!("{} [{}: {default}]: ", tr.t(key), tr.t(keys::HINT_ENTER_DEFAULT));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIZING: &str = "main_menu.sizing";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NO_CATALOG: &str = "error.no_catalog";

    pub const SIZING_HEADING: &str = "sizing.heading";
    pub const SIZING_USER_TYPE_OPTIONS: &str = "sizing.user_type_options";
    pub const PROMPT_OCCUPANTS: &str = "prompt.occupants";
    pub const PROMPT_MEALS: &str = "prompt.meals";
    pub const PROMPT_ROOMS: &str = "prompt.rooms";
    pub const PROMPT_DAILY_LITERS: &str = "prompt.daily_liters";
    pub const PROMPT_HOURS_PER_DAY: &str = "prompt.hours_per_day";
    pub const SIZING_HEATING_OPTIONS: &str = "sizing.heating_options";
    pub const PROMPT_FUEL_PRICE: &str = "prompt.fuel_price";
    pub const PROMPT_LPG_SIZE: &str = "prompt.lpg_size";
    pub const PROMPT_ELEC_RATE: &str = "prompt.elec_rate";
    pub const SIZING_SYSTEM_OPTIONS: &str = "sizing.system_options";
    pub const PROMPT_SUN_HOURS: &str = "prompt.sun_hours";
    pub const PROMPT_AMBIENT_TEMP: &str = "prompt.ambient_temp";
    pub const PROMPT_INLET_TEMP: &str = "prompt.inlet_temp";
    pub const PROMPT_TARGET_TEMP: &str = "prompt.target_temp";
    pub const PROMPT_HEAT_PUMP_TYPE: &str = "prompt.heat_pump_type";
    pub const PROMPT_INCLUDE_COOLING: &str = "prompt.include_cooling";
    pub const HINT_ENTER_DEFAULT: &str = "hint.enter_default";

    pub const RESULT_SELECTED_MODEL: &str = "result.selected_model";
    pub const RESULT_ADJ_FLOW: &str = "result.adj_flow";
    pub const RESULT_ANNUAL_OLD: &str = "result.annual_old";
    pub const RESULT_ANNUAL_HEAT_PUMP: &str = "result.annual_heat_pump";
    pub const RESULT_COOL_SAVINGS: &str = "result.cool_savings";
    pub const RESULT_TOTAL_SAVINGS: &str = "result.total_savings";
    pub const RESULT_CAPEX: &str = "result.capex";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_PANELS: &str = "result.panels";
    pub const RESULT_EMISSIONS: &str = "result.emissions";
    pub const RESULT_NPV: &str = "result.npv";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_EMPTY: &str = "catalog.empty";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_CURRENCY_OPTIONS: &str = "settings.currency_options";
    pub const PROMPT_CATALOG_PATH: &str = "prompt.catalog_path";
    pub const PROMPT_LANGUAGE: &str = "prompt.language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]").to_string()
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" | "en-ph" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블을 점(.)으로 이은 평탄한 키 맵으로 바꾼다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Heat Pump ROI Toolbox ===",
        MAIN_MENU_SIZING => "1) 급탕 히트펌프 사이징",
        MAIN_MENU_CATALOG => "2) 후보 카탈로그 보기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NO_CATALOG => "카탈로그 파일이 설정되지 않았습니다. 설정 메뉴나 --catalog 로 지정하세요.",
        SIZING_HEADING => "\n-- 급탕 히트펌프 사이징 --",
        SIZING_USER_TYPE_OPTIONS => "사용처: 1=가정 2=식당 3=리조트 4=직접 입력",
        PROMPT_OCCUPANTS => "거주 인원 [명]",
        PROMPT_MEALS => "일일 식사 수",
        PROMPT_ROOMS => "투숙 객실 수",
        PROMPT_DAILY_LITERS => "일일 온수 사용량 [L]",
        PROMPT_HOURS_PER_DAY => "가동 시간 [h/day]",
        SIZING_HEATING_OPTIONS => "기존 열원: 1=전기 2=프로판(LPG) 3=가스 4=디젤",
        PROMPT_FUEL_PRICE => "연료 단가",
        PROMPT_LPG_SIZE => "LPG 탱크 용량 [kg]",
        PROMPT_ELEC_RATE => "전기 요금 [/kWh]",
        SIZING_SYSTEM_OPTIONS => "전원: 1=계통 전용 2=계통+태양광",
        PROMPT_SUN_HOURS => "일조 시간 [h]",
        PROMPT_AMBIENT_TEMP => "외기 온도 [°C]",
        PROMPT_INLET_TEMP => "급수 온도 [°C]",
        PROMPT_TARGET_TEMP => "목표 출탕 온도 [°C]",
        PROMPT_HEAT_PUMP_TYPE => "냉매 필터 (all, r290, r32 ...)",
        PROMPT_INCLUDE_COOLING => "냉방 겸용 필요? (y/n)",
        HINT_ENTER_DEFAULT => "엔터=기본값",
        RESULT_SELECTED_MODEL => "선정 모델:",
        RESULT_ADJ_FLOW => "보정 출탕량:",
        RESULT_ANNUAL_OLD => "기존 열원 연간 비용:",
        RESULT_ANNUAL_HEAT_PUMP => "히트펌프 연간 전기 비용:",
        RESULT_COOL_SAVINGS => "냉방 부산물 절감:",
        RESULT_TOTAL_SAVINGS => "연간 총 절감액:",
        RESULT_CAPEX => "투자비:",
        RESULT_PAYBACK => "회수기간 [년]:",
        RESULT_PANELS => "태양광 패널 수:",
        RESULT_EMISSIONS => "연간 CO₂ 회피량 [kg]:",
        RESULT_NPV => "NPV:",
        CATALOG_HEADING => "\n-- 후보 카탈로그 --",
        CATALOG_EMPTY => "카탈로그가 비어 있습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 통화  2) 카탈로그 경로  3) 언어",
        SETTINGS_CURRENCY_OPTIONS => "통화: 1=PHP 2=USD 3=GBP 4=EUR",
        PROMPT_CATALOG_PATH => "카탈로그 파일 경로: ",
        PROMPT_LANGUAGE => "언어 (auto/ko/en-us): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Heat Pump ROI Toolbox ===",
        MAIN_MENU_SIZING => "1) Hot-water heat pump sizing",
        MAIN_MENU_CATALOG => "2) Show candidate catalog",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NO_CATALOG => "No catalog file configured. Set one in Settings or pass --catalog.",
        SIZING_HEADING => "\n-- Hot-water heat pump sizing --",
        SIZING_USER_TYPE_OPTIONS => "Site: 1=home 2=restaurant 3=resort 4=custom",
        PROMPT_OCCUPANTS => "Occupants",
        PROMPT_MEALS => "Meals per day",
        PROMPT_ROOMS => "Rooms occupied",
        PROMPT_DAILY_LITERS => "Daily hot water [L]",
        PROMPT_HOURS_PER_DAY => "Operating hours [h/day]",
        SIZING_HEATING_OPTIONS => "Current heating: 1=electric 2=propane (LPG) 3=gas 4=diesel",
        PROMPT_FUEL_PRICE => "Fuel price",
        PROMPT_LPG_SIZE => "LPG tank size [kg]",
        PROMPT_ELEC_RATE => "Electricity rate [/kWh]",
        SIZING_SYSTEM_OPTIONS => "Supply: 1=grid only 2=grid + solar",
        PROMPT_SUN_HOURS => "Peak sun hours [h]",
        PROMPT_AMBIENT_TEMP => "Ambient temperature [°C]",
        PROMPT_INLET_TEMP => "Inlet water temperature [°C]",
        PROMPT_TARGET_TEMP => "Target outlet temperature [°C]",
        PROMPT_HEAT_PUMP_TYPE => "Refrigerant filter (all, r290, r32 ...)",
        PROMPT_INCLUDE_COOLING => "Need cooling too? (y/n)",
        HINT_ENTER_DEFAULT => "enter=default",
        RESULT_SELECTED_MODEL => "Selected model:",
        RESULT_ADJ_FLOW => "Adjusted flow:",
        RESULT_ANNUAL_OLD => "Annual cost, current heating:",
        RESULT_ANNUAL_HEAT_PUMP => "Annual cost, heat pump:",
        RESULT_COOL_SAVINGS => "Cooling byproduct savings:",
        RESULT_TOTAL_SAVINGS => "Total annual savings:",
        RESULT_CAPEX => "CapEx:",
        RESULT_PAYBACK => "Payback [years]:",
        RESULT_PANELS => "Solar panels:",
        RESULT_EMISSIONS => "CO₂ avoided per year [kg]:",
        RESULT_NPV => "NPV:",
        CATALOG_HEADING => "\n-- Candidate catalog --",
        CATALOG_EMPTY => "Catalog is empty.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Currency  2) Catalog path  3) Language",
        SETTINGS_CURRENCY_OPTIONS => "Currency: 1=PHP 2=USD 3=GBP 4=EUR",
        PROMPT_CATALOG_PATH => "Catalog file path: ",
        PROMPT_LANGUAGE => "Language (auto/ko/en-us): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        _ => return None,
    })
}

//! 사이징 엔진이 참조하는 고정 상수 테이블.
//!
//! 값은 현장 보정치이며 엔진이 스스로 바꾸지 않는다. 모두 `const`로 두어 런타임 변경 경로가 없다.

use super::input::{Currency, HeatingType};

/// `base_lhr`가 정의된 기준 외기 온도 [°C]
pub const RATED_AMBIENT_C: f64 = 20.0;
/// `base_lhr`가 정의된 기준 승온폭(lift) [°C]
pub const RATED_LIFT_C: f64 = 40.0;
/// 냉방 부산물 추정에 쓰는 고정 COP
pub const COOLING_COP: f64 = 2.6;

/// 태양광 패널 1장의 정격 출력 [kW]
pub const SOLAR_PANEL_KW_RATED: f64 = 0.425;
/// 태양광 패널 1장 단가 [USD]
pub const SOLAR_PANEL_COST_USD: f64 = 200.0;
/// 인버터 단가 [USD/W]
pub const INVERTER_COST_PER_WATT_USD: f64 = 0.30;

/// 물 1 L를 1 K 올리는 데 필요한 열량 [Wh]
pub const WATER_WH_PER_LITER_K: f64 = 1.163;
/// LPG 발열량 [kWh/kg]
pub const LPG_KWH_PER_KG: f64 = 13.8;
/// 디젤 발열량 [kWh/L]
pub const DIESEL_KWH_PER_LITER: f64 = 10.7;
/// 외기 1 °C 편차당 용량 보정률
pub const AMBIENT_DERATE_PER_C: f64 = 0.015;

/// 가정 1인당 일일 온수 사용량 [L]
pub const LITERS_PER_OCCUPANT: f64 = 50.0;
/// 식사 1회당 온수 사용량 [L]
pub const LITERS_PER_MEAL: f64 = 7.0;
/// 객실 1실당 일일 온수 사용량 [L]
pub const LITERS_PER_ROOM: f64 = 50.0;

/// 카탈로그에 COP가 없을 때 쓰는 DHW COP
pub const DEFAULT_COP_DHW: f64 = 3.8;
/// 카탈로그에 최고 출수 온도가 없을 때의 값 [°C]
pub const DEFAULT_MAX_TEMP_C: f64 = 60.0;
/// LPG 탱크 용량 미입력 시 [kg]
pub const DEFAULT_LPG_SIZE_KG: f64 = 11.0;
/// 일조 시간 미입력 시 [h]
pub const DEFAULT_SUN_HOURS: f64 = 5.5;
/// 과거 견적과 맞추기 위한 고정 USD→PHP 환율
pub const LEGACY_PHP_PER_USD: f64 = 58.5;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// 통화 기호를 반환한다.
pub fn symbol(currency: Currency) -> &'static str {
    match currency {
        Currency::PHP => "₱",
        Currency::USD => "$",
        Currency::GBP => "£",
        Currency::EUR => "€",
    }
}

/// 기존 열원의 열량 환산 배출계수 [kg CO₂e / kWh].
pub fn emission_factor(heating: HeatingType) -> f64 {
    match heating {
        HeatingType::Electric => 0.7,
        HeatingType::Propane => 0.23,
        HeatingType::Gas => 0.20,
        HeatingType::Diesel => 0.25,
    }
}

/// 지역(통화)별 기본 요금. 화면 기본값으로만 쓰이고 엔진 계산에는 들어가지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalRates {
    /// 계통 전기 [통화/kWh]
    pub grid: f64,
    /// LPG 탱크 1개 가격 [통화]
    pub lpg_price: f64,
    /// LPG 탱크 용량 [kg]
    pub lpg_size: f64,
    /// 도시가스 [통화/kWh]
    pub gas: f64,
    /// 디젤 [통화/L]
    pub diesel: f64,
}

const PHP_RATES: RegionalRates = RegionalRates {
    grid: 12.25,
    lpg_price: 950.0,
    lpg_size: 11.0,
    gas: 4.5,
    diesel: 60.0,
};

const USD_RATES: RegionalRates = RegionalRates {
    grid: 0.16,
    lpg_price: 30.0,
    lpg_size: 9.0,
    gas: 0.05,
    diesel: 1.0,
};

const GBP_RATES: RegionalRates = RegionalRates {
    grid: 0.28,
    lpg_price: 35.0,
    lpg_size: 13.0,
    gas: 0.07,
    diesel: 1.5,
};

const EUR_RATES: RegionalRates = RegionalRates {
    grid: 0.30,
    lpg_price: 40.0,
    lpg_size: 11.0,
    gas: 0.09,
    diesel: 1.7,
};

/// 통화별 기본 요금 테이블을 조회한다.
pub fn default_rate(currency: Currency) -> RegionalRates {
    match currency {
        Currency::PHP => PHP_RATES,
        Currency::USD => USD_RATES,
        Currency::GBP => GBP_RATES,
        Currency::EUR => EUR_RATES,
    }
}

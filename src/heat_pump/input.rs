use serde::{Deserialize, Serialize};

use super::constants::default_rate;

/// 온수 수요를 추정하는 사용처 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// 가정: 거주 인원 기준
    Home,
    /// 식당: 일일 식사 수 기준
    Restaurant,
    /// 리조트: 객실 + 식사 수 기준
    Resort,
    /// 사용자가 직접 일일 사용량을 입력
    #[default]
    Custom,
}

/// 기존(교체 대상) 온수 열원.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatingType {
    #[default]
    Electric,
    Propane,
    Gas,
    Diesel,
}

/// 히트펌프 전력 공급 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemType {
    #[default]
    #[serde(rename = "grid-only")]
    GridOnly,
    #[serde(rename = "grid-solar")]
    GridSolar,
}

/// 결과 표시 통화.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Currency {
    #[default]
    PHP,
    USD,
    GBP,
    EUR,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::PHP, Currency::USD, Currency::GBP, Currency::EUR];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::PHP => "PHP",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
        }
    }

    /// 통화 코드 문자열(대소문자 무시)을 해석한다.
    pub fn from_code(code: &str) -> Option<Self> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// 냉매/제품군 필터. 정확히 `all`일 때만 모든 후보를 허용한다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeatPumpFilter {
    #[default]
    All,
    Type(String),
}

impl HeatPumpFilter {
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            HeatPumpFilter::All
        } else {
            HeatPumpFilter::Type(value.to_string())
        }
    }

    /// 후보의 type 태그가 필터를 통과하는지 확인한다.
    pub fn matches(&self, candidate_type: &str) -> bool {
        match self {
            HeatPumpFilter::All => true,
            HeatPumpFilter::Type(t) => candidate_type.eq_ignore_ascii_case(t),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HeatPumpFilter::All => "all",
            HeatPumpFilter::Type(t) => t.as_str(),
        }
    }
}

impl Serialize for HeatPumpFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HeatPumpFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(HeatPumpFilter::parse(&s))
    }
}

/// 한 번의 사이징 계산에 쓰이는 입력 값 묶음.
///
/// 온도는 모두 °C, 유량은 L, 단가는 `currency` 기준 현지 통화이다.
/// 시나리오 파일은 snake_case 와 기존 camelCase 키를 모두 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    #[serde(alias = "userType")]
    pub user_type: UserType,
    pub occupants: f64,
    #[serde(alias = "mealsPerDay")]
    pub meals_per_day: f64,
    #[serde(alias = "roomsOccupied")]
    pub rooms_occupied: f64,
    #[serde(alias = "dailyLitersInput")]
    pub daily_liters_input: f64,
    /// 히트펌프 가동 시간 [h/day]
    #[serde(alias = "hoursPerDay")]
    pub hours_per_day: f64,

    #[serde(alias = "heatingType")]
    pub heating_type: HeatingType,
    /// 기존 연료 단가 (전기/가스: 1 kWh당, 프로판: 탱크당, 디젤: 1 L당)
    #[serde(alias = "fuelPrice")]
    pub fuel_price: f64,
    /// LPG 탱크 용량 [kg]. 0이면 11 kg으로 본다.
    #[serde(alias = "lpgSize")]
    pub lpg_size: f64,

    /// 전기 요금 [현지 통화/kWh]
    #[serde(alias = "elecRate")]
    pub elec_rate: f64,
    #[serde(alias = "systemType")]
    pub system_type: SystemType,
    /// 일평균 일조 시간 [h]. 0이면 5.5 h로 본다.
    #[serde(alias = "sunHours")]
    pub sun_hours: f64,

    #[serde(alias = "ambientTemp")]
    pub ambient_temp: f64,
    #[serde(alias = "inletTemp")]
    pub inlet_temp: f64,
    #[serde(alias = "targetTemp")]
    pub target_temp: f64,

    #[serde(alias = "heatPumpType")]
    pub heat_pump_type: HeatPumpFilter,
    #[serde(alias = "includeCooling")]
    pub include_cooling: bool,

    pub currency: Currency,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            user_type: UserType::Home,
            occupants: 4.0,
            meals_per_day: 0.0,
            rooms_occupied: 0.0,
            daily_liters_input: 0.0,
            hours_per_day: 8.0,
            heating_type: HeatingType::Electric,
            fuel_price: 0.0,
            lpg_size: 11.0,
            elec_rate: 0.0,
            system_type: SystemType::GridOnly,
            sun_hours: 5.5,
            ambient_temp: 30.0,
            inlet_temp: 25.0,
            target_temp: 55.0,
            heat_pump_type: HeatPumpFilter::All,
            include_cooling: false,
            currency: Currency::PHP,
        }
    }
}

impl CalculationInput {
    /// 통화별 지역 기본 단가로 연료/전기 요금을 채운다.
    ///
    /// 연료 단가는 `heating_type`에 맞는 항목을 쓰고, 전기 열원이면 계통 요금을 그대로 쓴다.
    pub fn with_regional_defaults(mut self, currency: Currency) -> Self {
        let rate = default_rate(currency);
        self.currency = currency;
        self.elec_rate = rate.grid;
        self.lpg_size = rate.lpg_size;
        self.fuel_price = match self.heating_type {
            HeatingType::Electric => rate.grid,
            HeatingType::Propane => rate.lpg_price,
            HeatingType::Gas => rate.gas,
            HeatingType::Diesel => rate.diesel,
        };
        self
    }
}

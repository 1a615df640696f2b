use serde::{Serialize, Serializer};

use super::catalog::CandidateProduct;

/// 사이징 계산 오류. 둘 다 사용자 입력/카탈로그 조건에 따른 검증 실패이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// 일일 온수 수요가 0 이하
    InvalidDemand,
    /// 조건을 만족하는 후보 모델이 없음
    NoSuitableModel,
}

impl CalculationError {
    /// 화면에 그대로 노출되는 메시지. 기존 호출부와 문자열이 같아야 한다.
    pub fn message(&self) -> &'static str {
        match self {
            CalculationError::InvalidDemand => "Please enter valid demand inputs.",
            CalculationError::NoSuitableModel => {
                "No suitable models found for these requirements."
            }
        }
    }
}

impl std::fmt::Display for CalculationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CalculationError {}

/// 투자 회수기간. 절감액이 0 이하이면 "N/A"로 표기한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    /// 소수 첫째 자리로 반올림된 년수
    Years(f64),
    NotApplicable,
}

impl Payback {
    /// 투자비/연간 절감액으로 회수기간을 만든다.
    pub fn from_ratio(capex: f64, annual_savings: f64) -> Self {
        if annual_savings > 0.0 {
            Payback::Years(round1(capex / annual_savings))
        } else {
            Payback::NotApplicable
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payback::Years(y) => write!(f, "{y:.1}"),
            Payback::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capex {
    /// 장비 + 태양광 투자비 [표시 통화]
    pub total: f64,
}

/// 연간 비용/절감 요약. 금액은 모두 표시 통화 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Financials {
    pub symbol: &'static str,
    /// 기존 열원 연간 비용
    pub annual_cost_old: f64,
    /// 히트펌프 연간 전기 비용
    pub annual_karnot_cost: f64,
    /// 냉방 부산물 연간 절감액
    pub cool_savings: f64,
    pub total_savings: f64,
    pub payback_years: Payback,
    pub capex: Capex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// 현장 조건 보정 후 출탕량 [L/h]
    pub adj_flow_lhr: f64,
    /// 연간 CO₂ 회피량 [kg]
    pub emissions_saved: f64,
    /// 태양광 패널 수 (계통 전용이면 0)
    pub panels: i64,
}

/// 계산 중간값. 보고서와 검증용.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingBreakdown {
    pub daily_liters: f64,
    pub daily_thermal_kwh: f64,
    /// 기존 열원의 열량 환산 단가 [통화/kWh]
    pub current_rate_kwh: f64,
    pub performance_factor: f64,
    pub peak_liters_per_hour: f64,
    pub heat_pump_cop: f64,
    pub heat_pump_daily_kwh: f64,
    pub heat_pump_power_kw: f64,
    pub solar_powered_hours: f64,
    pub grid_powered_hours: f64,
    pub solar_capex_usd: f64,
    pub fx_rate: f64,
}

/// 사이징 결과. 선정 모델, 재무 요약, 기술 지표로 구성된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub system: CandidateProduct,
    pub financials: Financials,
    pub metrics: Metrics,
    pub breakdown: SizingBreakdown,
}

//! 급탕 히트펌프 사이징 및 투자 회수 계산.
//!
//! 순서: 일일 수요 → 기존 열원 비용 → 현장 조건 보정 → 후보 필터/최저가 선정
//! → 히트펌프 운전비(계통/태양광) → 냉방 부산물 → 재무 요약.
//! 입력과 후보 목록은 읽기만 하며 같은 입력에는 항상 같은 결과를 낸다.

use log::debug;
use std::cmp::Ordering;

use super::catalog::CandidateProduct;
use super::constants::*;
use super::fx::{FxRateProvider, LegacyFxRates};
use super::input::{CalculationInput, HeatingType, SystemType, UserType};
use super::result::{
    CalculationError, CalculationResult, Capex, Financials, Metrics, Payback, SizingBreakdown,
};

/// 사용처 유형에 따른 일일 온수 수요 [L/day].
pub fn daily_demand_liters(input: &CalculationInput) -> f64 {
    match input.user_type {
        UserType::Home => input.occupants * LITERS_PER_OCCUPANT,
        UserType::Restaurant => input.meals_per_day * LITERS_PER_MEAL,
        UserType::Resort => {
            input.rooms_occupied * LITERS_PER_ROOM + input.meals_per_day * LITERS_PER_MEAL
        }
        UserType::Custom => input.daily_liters_input,
    }
}

/// 물 1 L를 inlet → target 으로 데우는 열량 [kWh/L]. 역승온이면 음수가 된다.
pub fn kwh_per_liter(inlet_temp: f64, target_temp: f64) -> f64 {
    (target_temp - inlet_temp) * WATER_WH_PER_LITER_K / 1000.0
}

/// 기존 열원의 열량 1 kWh당 비용 [통화/kWh].
pub fn incumbent_rate_per_kwh(heating: HeatingType, fuel_price: f64, lpg_size: f64) -> f64 {
    match heating {
        HeatingType::Propane => {
            let tank_kg = if lpg_size != 0.0 && !lpg_size.is_nan() {
                lpg_size
            } else {
                DEFAULT_LPG_SIZE_KG
            };
            (fuel_price / tank_kg) / LPG_KWH_PER_KG
        }
        HeatingType::Diesel => fuel_price / DIESEL_KWH_PER_LITER,
        HeatingType::Electric | HeatingType::Gas => fuel_price,
    }
}

/// 정격 출탕량에 곱할 현장 보정 계수.
///
/// lift가 작을수록, 외기가 20 °C보다 따뜻할수록 커진다. 상하한은 두지 않는다.
pub fn performance_factor(ambient_temp: f64, inlet_temp: f64, target_temp: f64) -> f64 {
    let actual_lift = (target_temp - inlet_temp).max(1.0);
    (RATED_LIFT_C / actual_lift)
        * (1.0 + (ambient_temp - RATED_AMBIENT_C) * AMBIENT_DERATE_PER_C)
}

/// 가동 시간을 (태양광 시간, 계통 시간)으로 나눈다.
pub fn solar_hours_split(hours_per_day: f64, sun_hours: f64) -> (f64, f64) {
    let sun = if sun_hours != 0.0 && !sun_hours.is_nan() {
        sun_hours
    } else {
        DEFAULT_SUN_HOURS
    };
    let solar = hours_per_day.min(sun);
    let grid = (hours_per_day - solar).max(0.0);
    (solar, grid)
}

/// 히트펌프 소비전력을 감당할 패널 수.
pub fn solar_panel_count(power_draw_kw: f64) -> i64 {
    (power_draw_kw / SOLAR_PANEL_KW_RATED).ceil() as i64
}

/// 패널 + 인버터 투자비 [USD].
pub fn solar_capex_usd(panels: i64) -> f64 {
    let n = panels as f64;
    n * SOLAR_PANEL_COST_USD + n * SOLAR_PANEL_KW_RATED * 1000.0 * INVERTER_COST_PER_WATT_USD
}

/// 조건을 만족하는 후보 중 가장 싼 모델을 고른다.
///
/// 가격이 같으면 카탈로그 순서를 따른다. 정렬은 참조 사본에서 하므로 `candidates`는 그대로다.
pub fn select_candidate<'a>(
    input: &CalculationInput,
    candidates: &'a [CandidateProduct],
    performance_factor: f64,
    peak_liters_per_hour: f64,
) -> Option<&'a CandidateProduct> {
    let mut suitable: Vec<&CandidateProduct> = candidates
        .iter()
        .filter(|p| input.heat_pump_type.matches(&p.kind))
        .filter(|p| !input.include_cooling || p.is_reversible)
        .filter(|p| input.target_temp <= p.max_temp_c)
        .filter(|p| peak_liters_per_hour <= p.base_lhr * performance_factor)
        .collect();
    debug!(
        "{} of {} candidates satisfy type={}, cooling={}, target={}°C, peak={:.1} L/h",
        suitable.len(),
        candidates.len(),
        input.heat_pump_type.as_str(),
        input.include_cooling,
        input.target_temp,
        peak_liters_per_hour
    );
    suitable.sort_by(|a, b| {
        a.sales_price_usd
            .partial_cmp(&b.sales_price_usd)
            .unwrap_or(Ordering::Equal)
    });
    suitable.first().copied()
}

/// 기존 고정 환율로 사이징을 계산한다.
pub fn calculate_heat_pump(
    input: &CalculationInput,
    candidates: &[CandidateProduct],
) -> Result<CalculationResult, CalculationError> {
    calculate_heat_pump_with_fx(input, candidates, &LegacyFxRates)
}

/// 후보 목록에서 최적 모델을 고르고 운전비/절감액/회수기간을 계산한다.
pub fn calculate_heat_pump_with_fx(
    input: &CalculationInput,
    candidates: &[CandidateProduct],
    fx: &dyn FxRateProvider,
) -> Result<CalculationResult, CalculationError> {
    let daily_liters = daily_demand_liters(input);
    // NaN 수요도 여기서 걸러진다
    if !(daily_liters > 0.0) {
        return Err(CalculationError::InvalidDemand);
    }

    let daily_thermal_kwh = daily_liters * kwh_per_liter(input.inlet_temp, input.target_temp);
    let current_rate_kwh =
        incumbent_rate_per_kwh(input.heating_type, input.fuel_price, input.lpg_size);
    let annual_cost_old = daily_thermal_kwh * DAYS_PER_YEAR * current_rate_kwh;

    let pf = performance_factor(input.ambient_temp, input.inlet_temp, input.target_temp);
    let peak_liters_per_hour = daily_liters / input.hours_per_day;

    let system = select_candidate(input, candidates, pf, peak_liters_per_hour)
        .ok_or(CalculationError::NoSuitableModel)?;
    debug!(
        "Selected {} at {} USD",
        system.display_name(),
        system.sales_price_usd
    );

    let heat_pump_cop = system.cop_dhw;
    let heat_pump_daily_kwh = daily_thermal_kwh / heat_pump_cop;
    let heat_pump_power_kw = heat_pump_daily_kwh / input.hours_per_day;

    let (solar_powered_hours, grid_powered_hours, annual_karnot_cost, panels, solar_usd) =
        match input.system_type {
            SystemType::GridOnly => (
                0.0,
                input.hours_per_day,
                heat_pump_daily_kwh * DAYS_PER_YEAR * input.elec_rate,
                0,
                0.0,
            ),
            SystemType::GridSolar => {
                let (solar, grid) = solar_hours_split(input.hours_per_day, input.sun_hours);
                // 태양광 시간대 전력은 한계비용 0으로 본다. 패널 비용은 투자비에만 들어간다.
                let cost = heat_pump_power_kw * grid * DAYS_PER_YEAR * input.elec_rate;
                let panels = solar_panel_count(heat_pump_power_kw);
                (solar, grid, cost, panels, solar_capex_usd(panels))
            }
        };

    let cool_savings = if input.include_cooling && system.is_reversible {
        heat_pump_daily_kwh * COOLING_COP * DAYS_PER_YEAR * input.elec_rate
    } else {
        0.0
    };

    let total_savings = (annual_cost_old - annual_karnot_cost) + cool_savings;
    let fx_rate = fx.usd_to(input.currency);
    let capex_total = (system.sales_price_usd + solar_usd) * fx_rate;
    let payback_years = Payback::from_ratio(capex_total, total_savings);

    let metrics = Metrics {
        adj_flow_lhr: system.base_lhr * pf,
        emissions_saved: daily_thermal_kwh * DAYS_PER_YEAR * emission_factor(input.heating_type),
        panels,
    };

    Ok(CalculationResult {
        system: system.clone(),
        financials: Financials {
            symbol: symbol(input.currency),
            annual_cost_old,
            annual_karnot_cost,
            cool_savings,
            total_savings,
            payback_years,
            capex: Capex { total: capex_total },
        },
        metrics,
        breakdown: SizingBreakdown {
            daily_liters,
            daily_thermal_kwh,
            current_rate_kwh,
            performance_factor: pf,
            peak_liters_per_hour,
            heat_pump_cop,
            heat_pump_daily_kwh,
            heat_pump_power_kw,
            solar_powered_hours,
            grid_powered_hours,
            solar_capex_usd: solar_usd,
            fx_rate,
        },
    })
}

//! 급탕 히트펌프 사이징 회귀 테스트. 기대값은 손계산 결과이다.
use heat_pump_roi_toolbox::heat_pump::fx::ConfiguredFxRates;
use heat_pump_roi_toolbox::heat_pump::sizing::{
    daily_demand_liters, incumbent_rate_per_kwh, performance_factor, solar_capex_usd,
    solar_hours_split, solar_panel_count,
};
use heat_pump_roi_toolbox::heat_pump::{
    calculate_heat_pump, calculate_heat_pump_with_fx, CalculationError, CalculationInput,
    CandidateProduct, Currency, HeatPumpFilter, HeatingType, Payback, SystemType, UserType,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn unit(kind: &str, reversible: bool, max_temp_c: f64, base_lhr: f64, price: f64) -> CandidateProduct {
    CandidateProduct {
        id: None,
        name: Some(format!("{kind}-{price}")),
        kind: kind.to_string(),
        is_reversible: reversible,
        max_temp_c,
        base_lhr,
        cop_dhw: 4.0,
        sales_price_usd: price,
    }
}

/// 가정 4인(200 L/day), 25 → 55 °C, 외기 20 °C, 8 h 가동, 전기 10/kWh 기준.
fn home_input() -> CalculationInput {
    CalculationInput {
        user_type: UserType::Home,
        occupants: 4.0,
        hours_per_day: 8.0,
        heating_type: HeatingType::Electric,
        fuel_price: 10.0,
        elec_rate: 10.0,
        system_type: SystemType::GridOnly,
        ambient_temp: 20.0,
        inlet_temp: 25.0,
        target_temp: 55.0,
        heat_pump_type: HeatPumpFilter::All,
        include_cooling: false,
        currency: Currency::USD,
        ..CalculationInput::default()
    }
}

#[test]
fn daily_demand_follows_site_type() {
    let home = CalculationInput {
        user_type: UserType::Home,
        occupants: 4.0,
        ..CalculationInput::default()
    };
    assert_eq!(daily_demand_liters(&home), 200.0);

    let restaurant = CalculationInput {
        user_type: UserType::Restaurant,
        meals_per_day: 200.0,
        ..CalculationInput::default()
    };
    assert_eq!(daily_demand_liters(&restaurant), 1400.0);

    let resort = CalculationInput {
        user_type: UserType::Resort,
        rooms_occupied: 10.0,
        meals_per_day: 50.0,
        ..CalculationInput::default()
    };
    assert_eq!(daily_demand_liters(&resort), 850.0);

    let custom = CalculationInput {
        user_type: UserType::Custom,
        daily_liters_input: 730.0,
        ..CalculationInput::default()
    };
    assert_eq!(daily_demand_liters(&custom), 730.0);
}

#[test]
fn zero_demand_is_rejected() {
    let input = CalculationInput {
        user_type: UserType::Custom,
        daily_liters_input: 0.0,
        ..home_input()
    };
    let err = calculate_heat_pump(&input, &[unit("r290", false, 75.0, 500.0, 3000.0)])
        .expect_err("zero demand");
    assert_eq!(err, CalculationError::InvalidDemand);
    assert_eq!(err.to_string(), "Please enter valid demand inputs.");
}

#[test]
fn nan_demand_is_rejected() {
    let input = CalculationInput {
        user_type: UserType::Home,
        occupants: f64::NAN,
        ..home_input()
    };
    let err = calculate_heat_pump(&input, &[unit("r290", false, 75.0, 500.0, 3000.0)])
        .expect_err("nan demand");
    assert_eq!(err, CalculationError::InvalidDemand);
}

#[test]
fn incumbent_rate_conversion() {
    assert_close(
        "diesel",
        incumbent_rate_per_kwh(HeatingType::Diesel, 60.0, 0.0),
        60.0 / 10.7,
        1e-12,
    );
    assert_close(
        "propane",
        incumbent_rate_per_kwh(HeatingType::Propane, 950.0, 11.0),
        6.258_234,
        1e-6,
    );
    // 탱크 용량 0은 11 kg으로 본다
    assert_eq!(
        incumbent_rate_per_kwh(HeatingType::Propane, 950.0, 0.0),
        incumbent_rate_per_kwh(HeatingType::Propane, 950.0, 11.0)
    );
    assert_eq!(incumbent_rate_per_kwh(HeatingType::Gas, 4.5, 0.0), 4.5);
    assert_eq!(incumbent_rate_per_kwh(HeatingType::Electric, 12.25, 0.0), 12.25);
}

#[test]
fn performance_factor_scales_with_lift_and_ambient() {
    assert_close("rated", performance_factor(20.0, 15.0, 55.0), 1.0, 1e-12);
    assert_close("warm", performance_factor(30.0, 25.0, 55.0), 40.0 / 30.0 * 1.15, 1e-12);
    assert_close("cold", performance_factor(10.0, 15.0, 55.0), 0.85, 1e-12);
    // lift는 최소 1 K
    assert_close("no lift", performance_factor(20.0, 50.0, 50.0), 40.0, 1e-12);
}

#[test]
fn cheapest_suitable_model_wins() {
    let candidates = vec![
        unit("r290", false, 75.0, 100.0, 5000.0),
        unit("r290", false, 75.0, 100.0, 4500.0),
    ];
    let res = calculate_heat_pump(&home_input(), &candidates).expect("sizing");
    assert_eq!(res.system.sales_price_usd, 4500.0);
}

#[test]
fn equal_prices_keep_catalog_order() {
    let mut first = unit("r290", false, 75.0, 100.0, 3000.0);
    first.name = Some("first".into());
    let mut second = unit("r290", false, 75.0, 100.0, 3000.0);
    second.name = Some("second".into());
    let res = calculate_heat_pump(&home_input(), &[first, second]).expect("sizing");
    assert_eq!(res.system.name.as_deref(), Some("first"));
}

#[test]
fn no_model_above_max_temperature() {
    let input = CalculationInput {
        target_temp: 60.0,
        ..home_input()
    };
    let candidates = vec![
        unit("r290", false, 50.0, 500.0, 3000.0),
        unit("r32", true, 50.0, 900.0, 6000.0),
    ];
    let err = calculate_heat_pump(&input, &candidates).expect_err("no model");
    assert_eq!(err, CalculationError::NoSuitableModel);
    assert_eq!(
        err.to_string(),
        "No suitable models found for these requirements."
    );
}

#[test]
fn undersized_and_unrated_models_are_filtered() {
    // 피크 25 L/h, 보정계수 4/3 → 정격 18.75 L/h 초과 필요
    let candidates = vec![
        unit("r290", false, 75.0, 0.0, 100.0),
        unit("r290", false, 75.0, 18.0, 200.0),
        unit("r290", false, 75.0, 19.0, 300.0),
    ];
    let res = calculate_heat_pump(&home_input(), &candidates).expect("sizing");
    assert_eq!(res.system.sales_price_usd, 300.0);
    assert_close("adj flow", res.metrics.adj_flow_lhr, 19.0 * 40.0 / 30.0, 1e-12);
}

#[test]
fn refrigerant_filter_is_case_insensitive() {
    let input = CalculationInput {
        heat_pump_type: HeatPumpFilter::parse("r32"),
        ..home_input()
    };
    let candidates = vec![
        unit("R290", false, 75.0, 500.0, 1000.0),
        unit("R32", false, 75.0, 500.0, 2000.0),
    ];
    let res = calculate_heat_pump(&input, &candidates).expect("sizing");
    assert_eq!(res.system.kind, "R32");
}

#[test]
fn only_lowercase_all_is_wildcard() {
    assert_eq!(HeatPumpFilter::parse("all"), HeatPumpFilter::All);
    assert_eq!(HeatPumpFilter::parse("ALL"), HeatPumpFilter::Type("ALL".into()));
    assert_eq!(HeatPumpFilter::parse(""), HeatPumpFilter::Type(String::new()));

    // 빈 필터는 type이 빈 후보만 통과시킨다
    let input = CalculationInput {
        heat_pump_type: HeatPumpFilter::parse(""),
        ..home_input()
    };
    let candidates = vec![
        unit("r290", false, 75.0, 500.0, 1000.0),
        unit("", false, 75.0, 500.0, 2000.0),
    ];
    let res = calculate_heat_pump(&input, &candidates).expect("sizing");
    assert_eq!(res.system.kind, "");
    assert_eq!(res.system.sales_price_usd, 2000.0);
}

#[test]
fn grid_only_financials() {
    let res = calculate_heat_pump(&home_input(), &[unit("r290", false, 75.0, 100.0, 2000.0)])
        .expect("sizing");
    // 200 L × 30 K × 1.163 Wh = 6.978 kWh/day
    assert_close("thermal", res.breakdown.daily_thermal_kwh, 6.978, 1e-9);
    assert_close("old", res.financials.annual_cost_old, 6.978 * 365.0 * 10.0, 1e-9);
    assert_close(
        "heat pump",
        res.financials.annual_karnot_cost,
        6.978 / 4.0 * 365.0 * 10.0,
        1e-9,
    );
    assert_close("savings", res.financials.total_savings, 19_102.275, 1e-9);
    assert_eq!(res.financials.cool_savings, 0.0);
    assert_eq!(res.financials.capex.total, 2000.0);
    assert_eq!(res.financials.payback_years, Payback::Years(0.1));
    assert_eq!(res.financials.symbol, "$");
    assert_eq!(res.metrics.panels, 0);
    assert_close("emissions", res.metrics.emissions_saved, 6.978 * 365.0 * 0.7, 1e-9);
}

#[test]
fn zero_savings_reports_na_payback() {
    // COP 4, 연료 10/kWh, 전기 40/kWh → 기존 비용과 히트펌프 비용이 같다
    let input = CalculationInput {
        elec_rate: 40.0,
        ..home_input()
    };
    let res = calculate_heat_pump(&input, &[unit("r290", false, 75.0, 100.0, 2000.0)])
        .expect("sizing");
    assert_eq!(
        res.financials.annual_cost_old,
        res.financials.annual_karnot_cost
    );
    assert_eq!(res.financials.total_savings, 0.0);
    assert_eq!(res.financials.payback_years, Payback::NotApplicable);
    assert_eq!(res.financials.payback_years.to_string(), "N/A");

    let json = serde_json::to_value(&res).expect("json");
    assert_eq!(json["financials"]["payback_years"], "N/A");
}

#[test]
fn repeated_calls_are_identical_and_do_not_reorder_catalog() {
    let candidates = vec![
        unit("r290", true, 75.0, 500.0, 9000.0),
        unit("r32", false, 60.0, 300.0, 2500.0),
        unit("r290", false, 75.0, 200.0, 1200.0),
    ];
    let snapshot = candidates.clone();
    let input = home_input();
    let first = calculate_heat_pump(&input, &candidates).expect("first");
    let second = calculate_heat_pump(&input, &candidates).expect("second");
    assert_eq!(first, second);
    assert_eq!(candidates, snapshot);
    assert_eq!(first.system.sales_price_usd, 1200.0);
}

#[test]
fn solar_hours_and_panel_sizing() {
    assert_eq!(solar_hours_split(12.0, 5.5), (5.5, 6.5));
    assert_eq!(solar_hours_split(4.0, 5.5), (4.0, 0.0));
    // 일조 시간 0은 5.5 h로 본다
    assert_eq!(solar_hours_split(12.0, 0.0), (5.5, 6.5));
    assert_eq!(solar_panel_count(3.634_375), 9);
    assert_eq!(solar_panel_count(0.425), 1);
    assert_close("solar capex", solar_capex_usd(9), 2_947.5, 1e-12);
}

#[test]
fn grid_solar_financials() {
    let input = CalculationInput {
        user_type: UserType::Custom,
        daily_liters_input: 5000.0,
        hours_per_day: 12.0,
        system_type: SystemType::GridSolar,
        sun_hours: 5.5,
        ..home_input()
    };
    let res = calculate_heat_pump(&input, &[unit("r290", false, 75.0, 400.0, 3000.0)])
        .expect("sizing");
    // 5000 L × 0.03489 kWh/L = 174.45 kWh, COP 4 → 43.6125 kWh, 12 h → 3.634375 kW
    assert_close("power", res.breakdown.heat_pump_power_kw, 3.634_375, 1e-9);
    assert_eq!(res.breakdown.solar_powered_hours, 5.5);
    assert_eq!(res.breakdown.grid_powered_hours, 6.5);
    assert_eq!(res.metrics.panels, 9);
    assert_close(
        "heat pump cost",
        res.financials.annual_karnot_cost,
        3.634_375 * 6.5 * 365.0 * 10.0,
        1e-9,
    );
    assert_close("capex", res.financials.capex.total, 3000.0 + 2_947.5, 1e-12);
}

#[test]
fn cooling_requires_reversible_unit_and_adds_savings() {
    let input = CalculationInput {
        include_cooling: true,
        ..home_input()
    };
    let candidates = vec![
        unit("r290", false, 75.0, 500.0, 1000.0),
        unit("r290", true, 75.0, 500.0, 4000.0),
    ];
    let res = calculate_heat_pump(&input, &candidates).expect("sizing");
    assert!(res.system.is_reversible);
    assert_close("cool", res.financials.cool_savings, 6.978 / 4.0 * 2.6 * 365.0 * 10.0, 1e-9);

    let only_heating = vec![unit("r290", false, 75.0, 500.0, 1000.0)];
    let err = calculate_heat_pump(&input, &only_heating).expect_err("no reversible");
    assert_eq!(err, CalculationError::NoSuitableModel);
}

#[test]
fn php_capex_uses_fx_rate() {
    let input = CalculationInput {
        currency: Currency::PHP,
        ..home_input()
    };
    let candidates = [unit("r290", false, 75.0, 100.0, 2000.0)];
    let legacy = calculate_heat_pump(&input, &candidates).expect("legacy fx");
    assert_close("legacy", legacy.financials.capex.total, 2000.0 * 58.5, 1e-12);
    assert_eq!(legacy.financials.symbol, "₱");

    let fx = ConfiguredFxRates::default().with_rate(Currency::PHP, 56.0);
    let custom = calculate_heat_pump_with_fx(&input, &candidates, &fx).expect("custom fx");
    assert_close("custom", custom.financials.capex.total, 2000.0 * 56.0, 1e-12);
}

#[test]
fn negative_lift_is_not_rejected() {
    // 급수 60 °C → 목표 40 °C. 열량/비용/절감이 음수로 나오며 오류는 없다
    let input = CalculationInput {
        inlet_temp: 60.0,
        target_temp: 40.0,
        elec_rate: 20.0,
        ..home_input()
    };
    let res = calculate_heat_pump(&input, &[unit("r290", false, 75.0, 100.0, 2000.0)])
        .expect("negative lift still sizes");
    assert_close("thermal", res.breakdown.daily_thermal_kwh, -4.652, 1e-9);
    assert_close("pf", res.breakdown.performance_factor, 40.0, 1e-12);
    assert_close("old", res.financials.annual_cost_old, -16_979.8, 1e-9);
    assert_close("heat pump", res.financials.annual_karnot_cost, -8_489.9, 1e-9);
    assert_close("savings", res.financials.total_savings, -8_489.9, 1e-9);
    assert_eq!(res.financials.payback_years, Payback::NotApplicable);
    assert!(res.metrics.emissions_saved < 0.0);
}

#[test]
fn regional_defaults_seed_prices() {
    let input = CalculationInput {
        heating_type: HeatingType::Propane,
        ..CalculationInput::default()
    }
    .with_regional_defaults(Currency::PHP);
    assert_eq!(input.fuel_price, 950.0);
    assert_eq!(input.lpg_size, 11.0);
    assert_eq!(input.elec_rate, 12.25);
    assert_eq!(input.currency, Currency::PHP);
}

#[test]
fn scenario_accepts_legacy_field_names() {
    let src = r#"
        userType = "restaurant"
        mealsPerDay = 200
        hoursPerDay = 10
        heatingType = "diesel"
        fuelPrice = 60
        elecRate = 12.25
        systemType = "grid-solar"
        targetTemp = 60
        heatPumpType = "R290"
        includeCooling = true
        currency = "PHP"
    "#;
    let input: CalculationInput = toml::from_str(src).expect("scenario");
    assert_eq!(input.user_type, UserType::Restaurant);
    assert_eq!(daily_demand_liters(&input), 1400.0);
    assert_eq!(input.heating_type, HeatingType::Diesel);
    assert_eq!(input.system_type, SystemType::GridSolar);
    assert_eq!(input.heat_pump_type, HeatPumpFilter::Type("R290".into()));
    assert!(input.include_cooling);
}

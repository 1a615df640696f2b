use super::result::{CalculationResult, Payback};

/// 장기 경제성 입력.
#[derive(Debug, Clone)]
pub struct ProjectEconomicsInput {
    /// 초기 투자비 [통화]
    pub capex: f64,
    /// 연간 절감액 [통화/년]
    pub annual_savings: f64,
    /// 할인율 (0.08 = 8%)
    pub discount_rate: f64,
    /// 분석 기간 [년]
    pub years: u32,
}

impl ProjectEconomicsInput {
    /// 사이징 결과의 투자비와 연간 절감액을 그대로 가져온다.
    pub fn from_result(result: &CalculationResult, discount_rate: f64, years: u32) -> Self {
        Self {
            capex: result.financials.capex.total,
            annual_savings: result.financials.total_savings,
            discount_rate,
            years,
        }
    }
}

/// 장기 경제성 결과.
#[derive(Debug, Clone)]
pub struct ProjectEconomicsResult {
    /// 단순 회수기간
    pub simple_payback: Payback,
    /// 순현재가치(NPV) [통화]
    pub npv: f64,
    /// 분석 기간 누적 절감액(할인 전) - 투자비
    pub lifetime_net_savings: f64,
}

/// 단순 회수기간과 NPV를 계산한다.
pub fn project_economics(input: ProjectEconomicsInput) -> ProjectEconomicsResult {
    let simple_payback = Payback::from_ratio(input.capex, input.annual_savings);
    let rate = input.discount_rate.max(0.0);
    let mut npv = -input.capex;
    for year in 1..=input.years {
        let df = (1.0 + rate).powi(year as i32);
        npv += input.annual_savings / df;
    }
    ProjectEconomicsResult {
        simple_payback,
        npv,
        lifetime_net_savings: input.annual_savings * input.years as f64 - input.capex,
    }
}

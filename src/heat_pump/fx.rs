//! USD 투자비를 표시 통화로 환산하는 환율 공급자.

use log::warn;
use std::collections::BTreeMap;

use super::constants::LEGACY_PHP_PER_USD;
use super::input::Currency;

/// 1 USD가 몇 단위의 `currency`인지 알려준다.
pub trait FxRateProvider {
    fn usd_to(&self, currency: Currency) -> f64;
}

/// 기존 견적과 같은 결과를 내는 고정 환율. PHP만 58.5, 나머지는 1로 둔다.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFxRates;

impl FxRateProvider for LegacyFxRates {
    fn usd_to(&self, currency: Currency) -> f64 {
        match currency {
            Currency::PHP => LEGACY_PHP_PER_USD,
            _ => 1.0,
        }
    }
}

/// 설정 파일의 `[fx]` 값으로 덮어쓴 환율. 없는 통화는 고정 환율로 폴백한다.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredFxRates {
    overrides: BTreeMap<Currency, f64>,
}

impl ConfiguredFxRates {
    /// 통화 코드 → 환율 맵에서 만든다. 알 수 없는 코드나 0 이하 환율은 무시한다.
    pub fn from_codes(codes: &BTreeMap<String, f64>) -> Self {
        let mut overrides = BTreeMap::new();
        for (code, rate) in codes {
            match Currency::from_code(code) {
                Some(c) if *rate > 0.0 => {
                    overrides.insert(c, *rate);
                }
                _ => warn!("Ignoring fx override {code} = {rate}"),
            }
        }
        Self { overrides }
    }

    pub fn with_rate(mut self, currency: Currency, rate: f64) -> Self {
        self.overrides.insert(currency, rate);
        self
    }
}

impl FxRateProvider for ConfiguredFxRates {
    fn usd_to(&self, currency: Currency) -> f64 {
        self.overrides
            .get(&currency)
            .copied()
            .unwrap_or_else(|| LegacyFxRates.usd_to(currency))
    }
}

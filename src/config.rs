use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::heat_pump::fx::ConfiguredFxRates;
use crate::heat_pump::Currency;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 장기 경제성(NPV) 계산 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicsSettings {
    /// 할인율 (0.08 = 8%)
    pub discount_rate: f64,
    /// 분석 기간 [년]
    pub years: u32,
}

impl Default for EconomicsSettings {
    fn default() -> Self {
        Self {
            discount_rate: 0.08,
            years: 15,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / ko / en-us
    pub language: String,
    /// 기본 표시 통화. 지역 기본 요금도 이 통화를 따른다.
    pub currency: Currency,
    /// 후보 카탈로그 파일(.json/.toml)
    pub catalog_path: Option<String>,
    /// 1 USD당 환율 덮어쓰기 (예: PHP = 56.2)
    pub fx: BTreeMap<String, f64>,
    pub economics: EconomicsSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            currency: Currency::PHP,
            catalog_path: None,
            fx: BTreeMap::new(),
            economics: EconomicsSettings::default(),
        }
    }
}

impl Config {
    /// 설정의 `[fx]` 값으로 환율 공급자를 만든다.
    pub fn fx_rates(&self) -> ConfiguredFxRates {
        ConfiguredFxRates::from_codes(&self.fx)
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(DEFAULT_CONFIG_PATH)
}

/// 지정 경로의 설정을 읽는다. 파일이 없으면 기본값을 그 경로에 저장하고 반환한다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

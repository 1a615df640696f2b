//! 외부 제품 카탈로그 행을 엔진용 후보 모델로 바꾸고, 파일에서 카탈로그를 읽는다.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{DEFAULT_COP_DHW, DEFAULT_MAX_TEMP_C};

/// 카탈로그 원본 한 행. 필드명은 기존 문서 DB 스키마를 따른다.
///
/// 엔진이 쓰지 않는 필드는 무시된다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "isReversible", default)]
    pub is_reversible: Option<bool>,
    #[serde(default)]
    pub max_temp_c: Option<f64>,
    #[serde(default)]
    pub base_lhr: Option<f64>,
    #[serde(rename = "COP_DHW", default)]
    pub cop_dhw: Option<f64>,
    #[serde(rename = "salesPriceUSD", default)]
    pub sales_price_usd: Option<f64>,
}

/// 사이징 후보 히트펌프 모델. 기본값 치환이 끝난 상태이다.
///
/// 직렬화 필드명은 `CatalogRow`와 같아서 결과의 `system`을 다시 카탈로그로 읽을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    /// 냉매/제품군 태그 (r290, r32 ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// 냉방 겸용 여부
    #[serde(rename = "isReversible")]
    pub is_reversible: bool,
    /// 최고 출수 온도 [°C]
    pub max_temp_c: f64,
    /// 기준 조건(lift 40 K, 외기 20 °C) 정격 출탕량 [L/h]
    pub base_lhr: f64,
    /// 급탕 COP
    #[serde(rename = "COP_DHW")]
    pub cop_dhw: f64,
    /// 판매가 [USD]
    #[serde(rename = "salesPriceUSD")]
    pub sales_price_usd: f64,
}

/// 값이 없거나 0 또는 NaN이면 기본값으로 바꾼다.
///
/// 0을 "미입력"으로 취급하는 기존 견적 동작을 그대로 유지한다.
fn or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    }
}

impl From<CatalogRow> for CandidateProduct {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            kind: row.kind.unwrap_or_default(),
            is_reversible: row.is_reversible.unwrap_or(false),
            max_temp_c: or_default(row.max_temp_c, DEFAULT_MAX_TEMP_C),
            base_lhr: or_default(row.base_lhr, 0.0),
            cop_dhw: or_default(row.cop_dhw, DEFAULT_COP_DHW),
            sales_price_usd: row.sales_price_usd.unwrap_or(0.0),
        }
    }
}

impl CandidateProduct {
    /// 표시용 이름. 이름이 없으면 id, 그것도 없으면 type 태그를 쓴다.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or(self.kind.as_str())
    }
}

/// 카탈로그 로드 중 발생 가능한 오류.
#[derive(Debug)]
pub enum CatalogError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 파싱 오류
    Json(serde_json::Error),
    /// TOML 파싱 오류
    Toml(toml::de::Error),
    /// 확장자로 형식을 판별할 수 없음
    UnsupportedFormat(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "카탈로그 파일 입출력 오류: {e}"),
            CatalogError::Json(e) => write!(f, "카탈로그 JSON 파싱 오류: {e}"),
            CatalogError::Toml(e) => write!(f, "카탈로그 TOML 파싱 오류: {e}"),
            CatalogError::UnsupportedFormat(p) => write!(f, "지원하지 않는 카탈로그 형식: {p}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        CatalogError::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        CatalogError::Json(value)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(value: toml::de::Error) -> Self {
        CatalogError::Toml(value)
    }
}

/// 후보 카탈로그 공급자. 테넌트별 문서 컬렉션, 파일, 메모리 등 출처를 가린다.
pub trait CatalogProvider {
    fn load(&self) -> Result<Vec<CandidateProduct>, CatalogError>;
}

/// 이미 메모리에 있는 카탈로그.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    pub products: Vec<CandidateProduct>,
}

impl CatalogProvider for StaticCatalog {
    fn load(&self) -> Result<Vec<CandidateProduct>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// JSON(.json) 또는 TOML(.toml) 카탈로그 파일.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    pub path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalog {
    fn load(&self) -> Result<Vec<CandidateProduct>, CatalogError> {
        let content = fs::read_to_string(&self.path)?;
        let products = match extension(&self.path).as_deref() {
            Some("json") => parse_json_catalog(&content)?,
            Some("toml") => parse_toml_catalog(&content)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat(
                    self.path.display().to_string(),
                ))
            }
        };
        info!(
            "Loaded {} catalog rows from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Rows(Vec<CatalogRow>),
    Wrapped { products: Vec<CatalogRow> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    products: Vec<CatalogRow>,
}

/// JSON 배열 또는 `{ "products": [...] }` 형태를 읽는다.
pub fn parse_json_catalog(src: &str) -> Result<Vec<CandidateProduct>, CatalogError> {
    let rows = match serde_json::from_str::<JsonCatalog>(src)? {
        JsonCatalog::Rows(rows) => rows,
        JsonCatalog::Wrapped { products } => products,
    };
    Ok(rows.into_iter().map(CandidateProduct::from).collect())
}

/// `[[products]]` 테이블 배열을 읽는다.
pub fn parse_toml_catalog(src: &str) -> Result<Vec<CandidateProduct>, CatalogError> {
    let cat: TomlCatalog = toml::from_str(src)?;
    Ok(cat.products.into_iter().map(CandidateProduct::from).collect())
}

//! 연료 원소 분석값으로부터 연소 지표를 구하는 계산 모듈 모음.
//!
//! 입력 검증([`FuelComposition`]), 수치 계산([`CombustionMetrics`]),
//! 화면 표시용 포맷([`calculate`])으로 나뉜다. 모두 부수효과가 없는 순수 함수다.

pub mod calorific;
pub mod composition;
pub mod error;

pub use calorific::CombustionMetrics;
pub use composition::{FuelComposition, SUM_TARGET, SUM_TOLERANCE};
pub use error::CalcError;

use crate::measurement::{MeasurementField, OUTPUT_FIELDS};

/// 입력 필드 7개를 검증·계산하여 결과 필드 16개를 반환한다.
///
/// 각 값은 소수점 둘째 자리까지 포맷된다. 오류가 나면 결과는 하나도 만들지 않는다.
pub fn calculate(fields: &[MeasurementField]) -> Result<Vec<MeasurementField>, CalcError> {
    let composition = FuelComposition::from_fields(fields)?;
    let metrics = CombustionMetrics::from_composition(&composition);
    Ok(OUTPUT_FIELDS
        .iter()
        .zip(metrics.values())
        .map(|(spec, v)| spec.with_value(format_value(v)))
        .collect())
}

/// 결과값 표시 형식. 유한하지 않은 값은 `inf`, `-inf`, `NaN`으로 나온다.
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

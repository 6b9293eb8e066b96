use crate::measurement::{MeasurementField, INPUT_FIELDS};

use super::CalcError;

/// 성분 합계 목표값 [%]
pub const SUM_TARGET: f64 = 100.0;
/// 성분 합계 허용 오차 [%]
pub const SUM_TOLERANCE: f64 = 0.01;

/// 사용 상태(as-received) 기준 연료 원소 분석값 [질량 %].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelComposition {
    /// 수소
    pub hp: f64,
    /// 탄소
    pub cp: f64,
    /// 황
    pub sp: f64,
    /// 질소
    pub np: f64,
    /// 산소
    pub op: f64,
    /// 수분
    pub wp: f64,
    /// 회분
    pub ap: f64,
}

impl FuelComposition {
    /// 입력 필드 목록을 검증하고 성분값으로 변환한다.
    ///
    /// 필드 순서대로 빈 값, 숫자 형식을 검사하고 첫 오류에서 멈춘다.
    /// 7개 모두 통과하면 합계가 100 ± 0.01 인지 확인한다.
    pub fn from_fields(fields: &[MeasurementField]) -> Result<Self, CalcError> {
        let mut parsed = [0.0_f64; INPUT_FIELDS.len()];
        for (slot, spec) in parsed.iter_mut().zip(INPUT_FIELDS.iter()) {
            let field = fields.iter().find(|f| f.name == spec.name);
            let label = field.map_or(spec.label, |f| f.label.as_str());
            let raw = field.map_or("", |f| f.value.as_str());
            *slot = parse_value(raw, label)?;
        }

        let [hp, cp, sp, np, op, wp, ap] = parsed;
        let composition = Self {
            hp,
            cp,
            sp,
            np,
            op,
            wp,
            ap,
        };
        composition.check_sum()?;
        Ok(composition)
    }

    /// 7개 성분의 합계 [%]
    pub fn sum(&self) -> f64 {
        self.hp + self.cp + self.sp + self.np + self.op + self.wp + self.ap
    }

    fn check_sum(&self) -> Result<(), CalcError> {
        if (self.sum() - SUM_TARGET).abs() > SUM_TOLERANCE {
            Err(CalcError::SumMismatch)
        } else {
            Ok(())
        }
    }
}

fn parse_value(raw: &str, label: &str) -> Result<f64, CalcError> {
    if raw.is_empty() {
        return Err(CalcError::MissingField {
            label: label.to_string(),
        });
    }
    raw.parse::<f64>().map_err(|_| CalcError::InvalidNumber {
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::input_fields;

    fn fields(values: [&str; 7]) -> Vec<MeasurementField> {
        let mut out = input_fields();
        for (f, v) in out.iter_mut().zip(values) {
            f.value = v.to_string();
        }
        out
    }

    #[test]
    fn parses_valid_composition() {
        let c = FuelComposition::from_fields(&fields(["5", "50", "1", "1", "5", "8", "30"]))
            .expect("valid");
        assert_eq!(c.cp, 50.0);
        assert_eq!(c.ap, 30.0);
        assert!((c.sum() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn missing_wins_over_later_invalid() {
        let err = FuelComposition::from_fields(&fields(["5", "", "x", "1", "5", "8", "30"]))
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingField {
                label: "Cp".into()
            }
        );
    }

    #[test]
    fn invalid_before_later_missing() {
        let err = FuelComposition::from_fields(&fields(["5", "abc", "", "1", "5", "8", "30"]))
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidNumber {
                label: "Cp".into()
            }
        );
    }

    #[test]
    fn absent_field_reported_with_canonical_label() {
        let mut f = fields(["5", "50", "1", "1", "5", "8", "30"]);
        f.retain(|m| m.name != "np");
        let err = FuelComposition::from_fields(&f).unwrap_err();
        assert_eq!(err.label(), Some("Np"));
    }

    #[test]
    fn nan_sum_passes_sum_check() {
        let c = FuelComposition::from_fields(&fields(["NaN", "50", "1", "1", "5", "8", "30"]))
            .expect("NaN is not compared against the tolerance");
        assert!(c.hp.is_nan());
        assert!(c.sum().is_nan());
    }

    #[test]
    fn infinite_sum_is_mismatch() {
        let err = FuelComposition::from_fields(&fields(["inf", "50", "1", "1", "5", "8", "30"]))
            .unwrap_err();
        assert_eq!(err, CalcError::SumMismatch);
    }
}

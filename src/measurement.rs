use serde::{Deserialize, Serialize};

/// 화면에 표시되는 측정값/계산값 한 항목.
///
/// 입력 필드에서는 `value`가 사용자가 입력한 원문이고,
/// 결과 필드에서는 소수점 둘째 자리까지 포맷된 문자열이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementField {
    pub name: String,
    pub label: String,
    pub units: String,
    pub value: String,
}

/// 필드의 고정 메타데이터(이름, 표시명, 단위).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub units: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, units: &'static str) -> Self {
        Self { name, label, units }
    }

    /// 주어진 값으로 표시용 필드를 만든다.
    pub fn with_value(&self, value: impl Into<String>) -> MeasurementField {
        MeasurementField {
            name: self.name.to_string(),
            label: self.label.to_string(),
            units: self.units.to_string(),
            value: value.into(),
        }
    }
}

const PERCENT: &str = "%";
const KJ_PER_KG: &str = "КДж/кг";

/// 연료 원소 분석 입력 7개 (수소, 탄소, 황, 질소, 산소, 수분, 회분). 순서가 곧 표시 순서다.
pub const INPUT_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("hp", "Hp", PERCENT),
    FieldSpec::new("cp", "Cp", PERCENT),
    FieldSpec::new("sp", "Sp", PERCENT),
    FieldSpec::new("np", "Np", PERCENT),
    FieldSpec::new("op", "Op", PERCENT),
    FieldSpec::new("wp", "Wp", PERCENT),
    FieldSpec::new("ap", "Ap", PERCENT),
];

/// 계산 결과 16개. 환산 계수, 건조 기준 성분, 가연 기준 성분, 저위 발열량 순.
pub const OUTPUT_FIELDS: [FieldSpec; 16] = [
    FieldSpec::new("kpc", "Qрс", ""),
    FieldSpec::new("kpg", "Qрг", ""),
    FieldSpec::new("hc", "Hc", PERCENT),
    FieldSpec::new("cc", "Cc", PERCENT),
    FieldSpec::new("sc", "Sc", PERCENT),
    FieldSpec::new("nc", "Nc", PERCENT),
    FieldSpec::new("oc", "Oc", PERCENT),
    FieldSpec::new("ac", "Ac", PERCENT),
    FieldSpec::new("hg", "Hг", PERCENT),
    FieldSpec::new("cg", "Cг", PERCENT),
    FieldSpec::new("sg", "Sг", PERCENT),
    FieldSpec::new("ng", "Nг", PERCENT),
    FieldSpec::new("og", "Oг", PERCENT),
    FieldSpec::new("qrn", "Qрн", KJ_PER_KG),
    FieldSpec::new("qsn", "Qсн", KJ_PER_KG),
    FieldSpec::new("qgn", "Qгн", KJ_PER_KG),
];

/// 값이 비어 있는 입력 필드 7개를 만든다.
pub fn input_fields() -> Vec<MeasurementField> {
    INPUT_FIELDS.iter().map(|spec| spec.with_value("")).collect()
}

/// 필드 이름으로 값을 조회해 입력 필드 7개를 채운다. 없는 값은 빈 문자열로 둔다.
pub fn input_fields_from<'a, F>(mut lookup: F) -> Vec<MeasurementField>
where
    F: FnMut(&str) -> Option<&'a str>,
{
    INPUT_FIELDS
        .iter()
        .map(|spec| spec.with_value(lookup(spec.name).unwrap_or_default()))
        .collect()
}

use thiserror::Error;

/// 입력 검증 실패 종류. 메시지는 화면에 그대로 표시된다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// 비어 있는 입력 필드
    #[error("поле \"{label}\" не заповнене")]
    MissingField { label: String },
    /// 숫자로 해석할 수 없는 입력 필드
    #[error("поле \"{label}\" містить невірне значення")]
    InvalidNumber { label: String },
    /// 성분 합계가 100%에서 벗어남
    #[error("сума введених значень повинна дорівнювати 100")]
    SumMismatch,
}

impl CalcError {
    /// 오류와 관련된 필드 표시명. 합계 오류는 특정 필드가 없다.
    pub fn label(&self) -> Option<&str> {
        match self {
            CalcError::MissingField { label } | CalcError::InvalidNumber { label } => {
                Some(label.as_str())
            }
            CalcError::SumMismatch => None,
        }
    }
}

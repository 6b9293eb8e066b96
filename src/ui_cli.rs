use std::io::{self, Write};

use crate::measurement::MeasurementField;

/// 필드 목록을 `표시명 = 값 단위` 형식의 표로 출력한다.
pub fn write_fields<W: Write>(out: &mut W, fields: &[MeasurementField]) -> io::Result<()> {
    let width = fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);
    for f in fields {
        let pad = width - f.label.chars().count();
        writeln!(
            out,
            "{}{} = {:>12} {}",
            f.label,
            " ".repeat(pad),
            f.value,
            f.units
        )?;
    }
    Ok(())
}

/// 입력값과 계산 결과를 표준 출력에 표시한다.
pub fn print_report(inputs: &[MeasurementField], results: &[MeasurementField]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "-- 입력 --")?;
    write_fields(&mut out, inputs)?;
    writeln!(out, "\n-- 결과 --")?;
    write_fields(&mut out, results)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::OUTPUT_FIELDS;

    #[test]
    fn aligns_labels() {
        let fields = vec![
            OUTPUT_FIELDS[0].with_value("1.09"),
            OUTPUT_FIELDS[13].with_value("21464.80"),
        ];
        let mut buf = Vec::new();
        write_fields(&mut buf, &fields).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Qрс = "));
        assert!(lines[1].ends_with("21464.80 КДж/кг"));
    }
}

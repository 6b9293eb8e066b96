use std::fmt::Write;

use serde::Serialize;

use crate::measurement::{input_fields, MeasurementField};

/// 렌더링에 넘기는 화면 모델.
///
/// `results`는 비어 있거나 16개이며, `error`와 동시에 채워지지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub measurements: Vec<MeasurementField>,
    pub results: Vec<MeasurementField>,
    pub error: Option<String>,
}

impl ViewModel {
    /// 빈 입력 폼, 결과·오류 없음.
    pub fn blank() -> Self {
        Self {
            measurements: input_fields(),
            results: Vec::new(),
            error: None,
        }
    }
}

const PAGE_TITLE: &str = "Розрахунок складу палива";
const SUBMIT_LABEL: &str = "Розрахувати";

/// 화면 모델을 HTML 페이지로 렌더링한다.
pub fn render(model: &ViewModel) -> String {
    let mut html = String::with_capacity(4096);
    write_page(&mut html, model).expect("writing to String cannot fail");
    html
}

fn write_page(out: &mut String, model: &ViewModel) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"uk\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{PAGE_TITLE}</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>{PAGE_TITLE}</h1>")?;

    writeln!(out, "<form method=\"post\" action=\"/\">")?;
    writeln!(out, "<table>")?;
    for m in &model.measurements {
        writeln!(
            out,
            "<tr><td><label for=\"{name}\">{label}</label></td>\
             <td><input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></td>\
             <td>{units}</td></tr>",
            name = escape(&m.name),
            label = escape(&m.label),
            value = escape(&m.value),
            units = escape(&m.units),
        )?;
    }
    writeln!(out, "</table>")?;
    writeln!(out, "<button type=\"submit\">{SUBMIT_LABEL}</button>")?;
    writeln!(out, "</form>")?;

    if let Some(err) = &model.error {
        writeln!(out, "<p class=\"error\">{}</p>", escape(err))?;
    }

    if !model.results.is_empty() {
        writeln!(out, "<table class=\"results\">")?;
        for r in &model.results {
            writeln!(
                out,
                "<tr id=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&r.name),
                escape(&r.label),
                escape(&r.value),
                escape(&r.units),
            )?;
        }
        writeln!(out, "</table>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// HTML 텍스트/속성 값 이스케이프.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn blank_page_has_seven_inputs_and_no_results() {
        let html = render(&ViewModel::blank());
        assert_eq!(html.matches("<input ").count(), 7);
        assert!(!html.contains("class=\"results\""));
        assert!(!html.contains("class=\"error\""));
    }
}

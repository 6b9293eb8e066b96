//! 단일 페이지 웹 폼 게이트웨이.
//!
//! 요청에서 입력값을 꺼내 [`crate::fuel::calculate`]에 넘기고, 결과나 오류를 담은
//! [`ViewModel`]을 HTML로 렌더링한다. 요청 간 공유 상태는 없다.

pub mod view;

use std::net::SocketAddr;

use tracing::{debug, info, warn};
use warp::Filter;

use crate::fuel;
use crate::measurement::input_fields_from;

pub use view::{render, ViewModel};

/// POST 본문 최대 크기 [byte]
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

/// 게이트웨이가 받은 요청 한 건.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// GET 요청 또는 폼 인코딩을 해석할 수 없는 POST
    Blank,
    /// 제출된 폼 값 (이름, 값) 목록. 같은 이름이 여러 번 오면 첫 값을 쓴다.
    Form(Vec<(String, String)>),
}

impl Submission {
    fn value_of(&self, name: &str) -> Option<&str> {
        match self {
            Submission::Blank => None,
            Submission::Form(pairs) => pairs
                .iter()
                .find(|(k, _)| k.as_str() == name)
                .map(|(_, v)| v.as_str()),
        }
    }
}

/// 요청 한 건을 처리해 화면 모델을 만든다.
pub fn handle(submission: &Submission) -> ViewModel {
    if let Submission::Blank = submission {
        return ViewModel::blank();
    }

    let measurements = input_fields_from(|name| submission.value_of(name));
    match fuel::calculate(&measurements) {
        Ok(results) => {
            debug!(count = results.len(), "calculation succeeded");
            ViewModel {
                measurements,
                results,
                error: None,
            }
        }
        Err(err) => {
            debug!(error = %err, "calculation rejected");
            ViewModel {
                measurements,
                results: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}

/// `/` 경로의 GET/POST 라우트.
pub fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let blank = warp::path::end()
        .and(warp::get())
        .map(|| Submission::Blank);

    let submit = warp::path::end()
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(
            warp::body::form::<Vec<(String, String)>>()
                .map(Submission::Form)
                .or(warp::any().map(|| {
                    warn!("malformed form body, rendering blank page");
                    Submission::Blank
                }))
                .unify(),
        );

    blank
        .or(submit)
        .unify()
        .map(|submission: Submission| warp::reply::html(render(&handle(&submission))))
}

/// 주어진 주소에서 서버를 실행한다.
pub async fn serve(addr: SocketAddr) {
    info!(%addr, "server is listening");
    warp::serve(routes().with(warp::trace::request()))
        .run(addr)
        .await;
}

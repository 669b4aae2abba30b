#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use reportcard::{build_router, AppConfig, AppState};
use tower::ServiceExt;

pub const MARKS_520: [&str; 8] = ["80", "70", "90", "60", "50", "100", "40", "30"];

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_state(AppState::from_config(&AppConfig::default()))
    }

    pub fn with_config(cfg: &AppConfig) -> Self {
        Self::with_state(AppState::from_config(cfg))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).expect("request"))
            .await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        self.send(builder.body(Body::from(form_body(fields))).expect("request"))
            .await
    }

    /// Logs in with the default credentials and returns the cookie pair.
    pub async fn login(&self) -> String {
        let resp = self
            .post_form(
                "/login",
                &[("username", "teacher"), ("password", "1234")],
                None,
            )
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let set_cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("set-cookie");
        set_cookie
            .split(';')
            .next()
            .expect("cookie pair")
            .to_string()
    }

    pub async fn add_student(
        &self,
        cookie: &str,
        name: &str,
        father: &str,
        roll: &str,
        marks: &[&str],
    ) -> Response<Body> {
        let subjects = self.state.school.subjects.clone();
        let mut fields: Vec<(&str, &str)> =
            vec![("name", name), ("father", father), ("roll", roll)];
        for (subject, mark) in subjects.iter().zip(marks) {
            fields.push((subject.as_str(), *mark));
        }
        self.post_form("/add", &fields, Some(cookie)).await
    }
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(s: &str) -> String {
    let mut out = String::new();
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_text(resp: Response<Body>) -> String {
    String::from_utf8(body_bytes(resp).await).expect("utf-8 body")
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

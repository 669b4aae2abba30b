//! Server-rendered HTML pages.
//!
//! Page markup lives in `templates/*.html` next to `Cargo.toml` and is
//! compiled into the binary with `include_str!`. Templates are parsed on
//! first use by the environment's loader. Every template name ends in
//! `.html`, so minijinja HTML-escapes all interpolated values.

use minijinja::{context, Environment, Error};
use serde::Serialize;

use crate::config::SchoolInfo;
use crate::report::{display_number, ReportCard};
use crate::roster::StudentRecord;

pub const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
pub const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
pub const LOGIN_TEMPLATE: &str = include_str!("../../templates/login.html");
pub const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");

fn template_source(name: &str) -> Option<&'static str> {
    match name {
        "base.html" => Some(BASE_TEMPLATE),
        "index.html" => Some(INDEX_TEMPLATE),
        "login.html" => Some(LOGIN_TEMPLATE),
        "report.html" => Some(REPORT_TEMPLATE),
        _ => None,
    }
}

/// Shared template environment. Numbers go through the `num` filter so pages
/// and PDFs print marks the same way.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(template_source(name).map(str::to_string)));
        env.add_filter("num", display_number);
        Self { env }
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, Error> {
        self.env.get_template(name)?.render(ctx)
    }

    pub fn index(&self, page: &IndexPage<'_>) -> Result<String, Error> {
        self.render("index.html", page)
    }

    pub fn login(&self, notice: Option<&str>) -> Result<String, Error> {
        self.render("login.html", context! { notice })
    }

    pub fn report(&self, school: &SchoolInfo, report: &ReportCard) -> Result<String, Error> {
        let issued = report.issued_on.format("%d %B %Y").to_string();
        self.render("report.html", context! { school, report, issued })
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct RosterRow<'a> {
    pub record: &'a StudentRecord,
    pub highlight: bool,
}

/// The roster page plus at most one derived panel.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPage<'a> {
    pub school: &'a SchoolInfo,
    pub rows: Vec<RosterRow<'a>>,
    pub subject_averages: Vec<f64>,
    pub class_average: Option<f64>,
    pub topper: Option<&'a StudentRecord>,
    pub search_active: bool,
}

impl<'a> IndexPage<'a> {
    pub fn new(
        school: &'a SchoolInfo,
        records: &'a [StudentRecord],
        subject_averages: Vec<f64>,
    ) -> Self {
        Self {
            school,
            rows: records
                .iter()
                .map(|record| RosterRow {
                    record,
                    highlight: false,
                })
                .collect(),
            subject_averages,
            class_average: None,
            topper: None,
            search_active: false,
        }
    }
}

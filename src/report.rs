use chrono::NaiveDate;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use serde::Serialize;

use crate::calc::Grade;
use crate::config::SchoolInfo;
use crate::roster::StudentRecord;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectLine {
    pub subject: String,
    pub mark: f64,
}

/// Everything a single-student report shows, independent of output format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub institute_name: String,
    pub class_name: String,
    pub student_name: String,
    pub father_name: String,
    pub roll_number: String,
    pub lines: Vec<SubjectLine>,
    pub total: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub gpa: f64,
    pub issued_on: NaiveDate,
}

impl ReportCard {
    pub fn new(school: &SchoolInfo, student: &StudentRecord, issued_on: NaiveDate) -> Self {
        let lines = school
            .subjects
            .iter()
            .enumerate()
            .map(|(idx, subject)| SubjectLine {
                subject: subject.clone(),
                mark: student.marks.get(idx).copied().unwrap_or(0.0),
            })
            .collect();
        Self {
            institute_name: school.institute_name.clone(),
            class_name: school.class_name.clone(),
            student_name: student.name.clone(),
            father_name: student.father_name.clone(),
            roll_number: student.roll_number.clone(),
            lines,
            total: student.total,
            percentage: student.percentage,
            grade: student.grade,
            gpa: student.gpa,
            issued_on,
        }
    }

    /// Attachment name; the student name is used as entered.
    pub fn file_name(&self) -> String {
        format!("{}_ReportCard.pdf", self.student_name)
    }
}

/// Turns a report into a downloadable document.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, report: &ReportCard) -> Result<Vec<u8>, RenderError>;
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE: f32 = 8.0;

/// A4 report card using the builtin Helvetica faces.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReportRenderer;

struct PageCursor {
    layer: PdfLayerReference,
    y: f32,
}

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PdfReportRenderer {
    fn render(&self, report: &ReportCard) -> Result<Vec<u8>, RenderError> {
        let title = format!("{} - Report Card", report.student_name);
        let (doc, page, layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;

        let mut cursor = PageCursor {
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - MARGIN,
        };
        let mut write = |text: &str, size: f32, x: f32, font: &IndirectFontRef, advance: bool| {
            if cursor.y < MARGIN {
                let (p, l) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
                cursor.layer = doc.get_page(p).get_layer(l);
                cursor.y = PAGE_HEIGHT - MARGIN;
            }
            cursor.layer.use_text(text, size, Mm(x), Mm(cursor.y), font);
            if advance {
                cursor.y -= LINE;
            }
        };

        write(&report.institute_name, 18.0, MARGIN, &bold, true);
        write(&report.class_name, 12.0, MARGIN, &regular, true);
        write("Report Card", 14.0, MARGIN, &bold, true);
        write(
            &format!("Name: {}", report.student_name),
            11.0,
            MARGIN,
            &regular,
            true,
        );
        write(
            &format!("Father's Name: {}", report.father_name),
            11.0,
            MARGIN,
            &regular,
            true,
        );
        write(
            &format!("Roll No: {}", report.roll_number),
            11.0,
            MARGIN,
            &regular,
            true,
        );
        write("", 11.0, MARGIN, &regular, true);

        write("Subject", 11.0, MARGIN, &bold, false);
        write("Marks", 11.0, MARGIN + 90.0, &bold, true);
        for line in &report.lines {
            write(&line.subject, 11.0, MARGIN, &regular, false);
            write(&display_number(line.mark), 11.0, MARGIN + 90.0, &regular, true);
        }
        write("", 11.0, MARGIN, &regular, true);

        let summary = [
            ("Total", display_number(report.total)),
            ("Percentage", format!("{}%", display_number(report.percentage))),
            ("Grade", report.grade.to_string()),
            ("GPA", display_number(report.gpa)),
        ];
        for (label, value) in summary {
            write(label, 11.0, MARGIN, &bold, false);
            write(&value, 11.0, MARGIN + 90.0, &regular, true);
        }
        write("", 11.0, MARGIN, &regular, true);
        write(
            &format!("Issued on {}", report.issued_on.format("%d %B %Y")),
            9.0,
            MARGIN,
            &regular,
            true,
        );

        doc.save_to_bytes().map_err(pdf_err)
    }
}

fn pdf_err<E: std::fmt::Debug>(e: E) -> RenderError {
    RenderError::Pdf(format!("{e:?}"))
}

/// Whole numbers keep one decimal place ("65.0"); others print as-is.
pub fn display_number(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

//! Encodes a [`Report`] as a PDF and hands it to the browser as a download.
use crate::{
	config::document::{BASE_FONT_PT, HEIGHT_MM, MARGIN_MM, WIDTH_MM},
	report::{Report, ReportRow},
};
use gloo_file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use wasm_bindgen::JsCast;

static PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph advance, as a fraction of the font size.
static GLYPH_WIDTH_EM: f32 = 0.55;
static LINE_SPACING: f32 = 1.6;
static GUTTER_MM: f32 = 4.0;
/// Title, blank, site, supervisor, date, blank, column headings.
static HEADER_LINES: usize = 7;
/// Blank line and the totals line.
static FOOTER_LINES: usize = 2;

static PDF_MIME: &str = "application/pdf";
/// How long the object url stays valid after the download link is clicked.
/// Some browsers read the blob after the click event has returned.
static URL_LIFETIME_MS: u32 = 60_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ExportError {
	#[error("The report is not available to export right now.")]
	ReportUnavailable,
	#[error("Could not build the PDF: {0}")]
	Encoding(String),
	#[error("The browser refused the download: {0}")]
	Download(String),
}

/// Where everything goes on the page, in millimetres.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	/// Body font size after scaling the table to the printable width.
	pub font_pt: f32,
	pub line_mm: f32,
	/// Left edge of each table column.
	pub columns: [f32; 4],
	pub rows_per_page: usize,
	pub pages: usize,
}

impl Layout {
	pub fn measure(report: &Report) -> Self {
		let mut widest = Report::COLUMNS.map(|heading| heading.chars().count());
		for row in &report.rows {
			for (width, cell) in widest.iter_mut().zip(row.cells()) {
				*width = (*width).max(cell.chars().count());
			}
		}

		let glyph_mm = BASE_FONT_PT * PT_TO_MM * GLYPH_WIDTH_EM;
		let natural = widest.map(|chars| chars as f32 * glyph_mm + GUTTER_MM);
		let available = WIDTH_MM - 2.0 * MARGIN_MM;
		let scale = (available / natural.iter().sum::<f32>()).min(1.0);

		let mut columns = [MARGIN_MM; 4];
		for idx in 1..columns.len() {
			columns[idx] = columns[idx - 1] + natural[idx - 1] * scale;
		}

		let font_pt = BASE_FONT_PT * scale;
		let line_mm = font_pt * PT_TO_MM * LINE_SPACING;
		let lines_per_page = ((HEIGHT_MM - 2.0 * MARGIN_MM) / line_mm) as usize;
		let rows_per_page = lines_per_page.saturating_sub(HEADER_LINES + FOOTER_LINES).max(1);
		let pages = report.rows.len().div_ceil(rows_per_page).max(1);

		Self {
			font_pt,
			line_mm,
			columns,
			rows_per_page,
			pages,
		}
	}
}

fn encoding(err: impl std::fmt::Debug) -> ExportError {
	ExportError::Encoding(format!("{err:?}"))
}

/// Writes lines top-down from the top-left content margin.
struct Pen<'a> {
	layer: PdfLayerReference,
	layout: &'a Layout,
	regular: &'a IndirectFontRef,
	bold: &'a IndirectFontRef,
	line: usize,
}

impl<'a> Pen<'a> {
	fn baseline(&self) -> Mm {
		Mm(HEIGHT_MM - MARGIN_MM - self.layout.line_mm * (self.line as f32 + 1.0))
	}

	fn text(&mut self, text: &str, bold: bool, scale: f32) {
		let font = match bold {
			true => self.bold,
			false => self.regular,
		};
		self.layer.use_text(text, self.layout.font_pt * scale, Mm(MARGIN_MM), self.baseline(), font);
		self.line += 1;
	}

	fn row(&mut self, cells: &[String; 4], bold: bool) {
		let font = match bold {
			true => self.bold,
			false => self.regular,
		};
		let baseline = self.baseline();
		for (x, cell) in self.layout.columns.iter().zip(cells) {
			self.layer.use_text(cell.as_str(), self.layout.font_pt, Mm(*x), baseline, font);
		}
		self.line += 1;
	}

	fn skip(&mut self) {
		self.line += 1;
	}
}

/// Lays the report out on as many A4 pages as its rows need.
pub fn render_pdf(report: &Report) -> Result<Vec<u8>, ExportError> {
	let layout = Layout::measure(report);
	let (document, page, layer) = PdfDocument::new(Report::TITLE, Mm(WIDTH_MM), Mm(HEIGHT_MM), "report");
	let regular = document.add_builtin_font(BuiltinFont::Helvetica).map_err(encoding)?;
	let bold = document.add_builtin_font(BuiltinFont::HelveticaBold).map_err(encoding)?;

	let headings = Report::COLUMNS.map(String::from);
	let mut chunks = report.rows.chunks(layout.rows_per_page).collect::<Vec<&[ReportRow]>>();
	if chunks.is_empty() {
		chunks.push(&[]);
	}
	let page_count = chunks.len();

	let mut target = (page, layer);
	for (idx, rows) in chunks.into_iter().enumerate() {
		if idx > 0 {
			target = document.add_page(Mm(WIDTH_MM), Mm(HEIGHT_MM), "report");
		}
		let mut pen = Pen {
			layer: document.get_page(target.0).get_layer(target.1),
			layout: &layout,
			regular: &regular,
			bold: &bold,
			line: 0,
		};

		let title = match page_count {
			1 => Report::TITLE.to_owned(),
			_ => format!("{} ({} of {page_count})", Report::TITLE, idx + 1),
		};
		pen.text(&title, true, 1.3);
		pen.skip();
		pen.text(&format!("Site: {}", report.site), false, 1.0);
		pen.text(&format!("Supervisor: {}", report.supervisor), false, 1.0);
		pen.text(&format!("Date: {}", report.date), false, 1.0);
		pen.skip();
		pen.row(&headings, true);
		for row in rows {
			pen.row(&row.cells(), false);
		}
		if idx + 1 == page_count {
			pen.skip();
			pen.text(&report.totals_line(), true, 1.0);
		}
	}

	document.save_to_bytes().map_err(encoding)
}

fn download_error(err: impl std::fmt::Debug) -> ExportError {
	ExportError::Download(format!("{err:?}"))
}

/// Saves `bytes` through an object url and a synthetic click on a link
/// attached to the page. The url is revoked once `URL_LIFETIME_MS` passes.
pub fn download(file_name: &str, bytes: &[u8]) -> Result<(), ExportError> {
	let document = gloo_utils::document();
	let Some(body) = document.body() else {
		return Err(ExportError::Download("the page has no body to attach the download link to".into()));
	};
	let url = ObjectUrl::from(Blob::new_with_options(bytes, Some(PDF_MIME)));
	let anchor = document
		.create_element("a")
		.map_err(download_error)?
		.dyn_into::<web_sys::HtmlAnchorElement>()
		.map_err(download_error)?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	body.append_child(&anchor).map_err(download_error)?;
	anchor.click();
	anchor.remove();

	// dropping the url revokes it
	Timeout::new(URL_LIFETIME_MS, move || drop(url)).forget();
	Ok(())
}

/// Encodes and downloads the report.
///
/// The PDF is laid out from `report` itself, not captured from the page.
/// `mounted` says whether the on-screen report sheet is rendered; export is
/// refused without it so the download always matches a report the user can see.
pub async fn export(report: Report, mounted: bool) -> Result<String, ExportError> {
	if !mounted {
		return Err(ExportError::ReportUnavailable);
	}
	// let the busy state paint before the encode blocks the thread
	gloo_timers::future::TimeoutFuture::new(0).await;
	let bytes = render_pdf(&report)?;
	let file_name = report.file_name();
	download(&file_name, &bytes)?;
	log::info!(target: "export", "exported {file_name} ({} bytes)", bytes.len());
	Ok(file_name)
}

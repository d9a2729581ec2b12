use std::{fs::File, path::PathBuf};

use clap::Parser;
use tux_pdf::{
    document::{static_ttf_parser::StaticTtfFace, PdfDocument},
    graphics::{color::BLACK_RGB, styles::Margin, TextStyle},
    layouts::table::{GridStyleGroup, Table, TablePageRules, TableStyles, TextCell},
    page::{page_sizes::A4, PdfPage},
    units::{Pt, UnitType},
    TuxPdfError, TuxPdfResult,
};

static ROBOTO_FONT: &[u8] = include_bytes!("../../tests/fonts/Roboto/Roboto-Regular.ttf");

#[derive(Debug, Clone, Parser)]
struct CsvToPdf {
    csv_file: PathBuf,
    #[clap(short, long)]
    output_file: Option<PathBuf>,
}

fn table_page(_: &mut PdfDocument) -> (TablePageRules, PdfPage) {
    let page = PdfPage::new_from_page_size(A4.landscape());
    let rules = TablePageRules {
        page_size: A4.landscape(),
        table_start_y: Some(A4.landscape().height - 10f32.pt()),
        table_stop_y: Some(10f32.pt()),
        margin: Some(Margin::left_and_right(10f32.pt(), 10f32.pt())),
    };
    (rules, page)
}

fn main() -> anyhow::Result<()> {
    let args = CsvToPdf::parse();
    if !args.csv_file.exists() {
        eprintln!("The file {:?} does not exist", args.csv_file);
        std::process::exit(1);
    }
    let output_file = args
        .output_file
        .unwrap_or_else(|| PathBuf::from("table.pdf"));

    let mut doc = PdfDocument::new(format!(
        "Table from {}",
        args.csv_file.file_name().unwrap().to_string_lossy()
    ));
    doc.metadata.info.producer = Some("tux-pdf/demos/csv_to_pdf".to_string());
    doc.metadata.info.author = Some("tux-pdf/demos/csv_to_pdf".to_string());
    doc.metadata.info.creation_date =
        Some(time::OffsetDateTime::now_local().unwrap_or(time::OffsetDateTime::now_utc()));

    let roboto_font = StaticTtfFace::from_slice(ROBOTO_FONT, 0)?;
    let roboto = doc.font_map().register_external_font(roboto_font)?;
    let text_style = TextStyle {
        font_ref: roboto,
        font_size: 11f32.pt(),
        ..Default::default()
    };

    let table_width = A4.landscape().width - 20f32.pt();
    let mut table = build_table_from_csv(&doc, &args.csv_file, table_width, &text_style)?;
    table = table.with_new_page(table_page);

    let first_page = table_page(&mut doc);
    table.render(&mut doc, first_page)?;

    let pdf = doc.write_into_pdf_document_writer()?;
    let mut file = File::create(output_file)?;
    pdf.save(&mut file)?;
    Ok(())
}

/// Reads the CSV's header row and records into a uniform (no row/column spans) [`Table`].
fn build_table_from_csv(
    document: &PdfDocument,
    file: &PathBuf,
    table_width: Pt,
    text_style: &TextStyle,
) -> TuxPdfResult<Table> {
    let csv_file = File::open(file).map_err(TuxPdfError::IOError)?;
    let mut csv_reader = csv::Reader::from_reader(csv_file);
    if !csv_reader.has_headers() {
        eprintln!("The CSV file must have headers");
        std::process::exit(1);
    }
    let headers: Vec<String> = csv_reader
        .headers()
        .expect("csv reader already confirmed to have headers")
        .iter()
        .map(String::from)
        .collect();
    let cols = headers.len();

    let records: Vec<csv::StringRecord> = csv_reader
        .records()
        .collect::<Result<_, _>>()
        .expect("malformed CSV record");
    for (index, record) in records.iter().enumerate() {
        if record.len() != cols {
            eprintln!(
                "Row {} has {} columns but the header has {} columns",
                index,
                record.len(),
                cols
            );
            std::process::exit(1);
        }
    }

    let mut table = Table::new(records.len() + 1, cols, table_width).with_styles(TableStyles {
        outer_styles: Some(GridStyleGroup {
            background_color: None,
            border_color: Some(BLACK_RGB),
            border_width: Some(1f32.pt()),
        }),
        ..Default::default()
    });

    let col_width = table_width * (1.0 / cols as f32);
    for header in &headers {
        table.new_cell(Some(Box::new(TextCell::new(
            document,
            header.as_str(),
            text_style.clone(),
            col_width,
        )?)))?;
    }
    for record in &records {
        for value in record.iter() {
            table.new_cell(Some(Box::new(TextCell::new(
                document,
                value.to_string(),
                text_style.clone(),
                col_width,
            )?)))?;
        }
    }
    Ok(table)
}

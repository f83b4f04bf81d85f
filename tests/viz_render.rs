use gtv_rs::layout::HeatMapLayout;
use gtv_rs::viz::{self, OutputFormat};
use gtv_rs::{HeatMapConfig, HeatMapRenderer};
use std::fs;
use tempfile::tempdir;

fn sample_layout() -> HeatMapLayout {
    let ds = gtv_rs::storage::load_dataset(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/sample.json"
    ))
    .unwrap();
    HeatMapRenderer::new(&HeatMapConfig::default())
        .render(&ds)
        .unwrap()
}

#[test]
fn svg_file_has_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heat-map.svg");
    viz::render_to_file(&sample_layout(), &path).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<rect"));
}

#[test]
fn svg_string_matches_canvas_size() {
    let layout = sample_layout();
    let svg = viz::render_svg_string(&layout).unwrap();
    assert!(svg.contains(&format!("width=\"{}\"", layout.canvas.width as u32)));
    assert!(svg.contains(&format!("height=\"{}\"", layout.canvas.height as u32)));
}

#[test]
fn html_page_carries_cell_data_and_tooltip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heat-map.html");
    let layout = sample_layout();
    viz::render_to_file(&layout, &path).unwrap();
    let html = fs::read_to_string(&path).unwrap();

    for id in ["description", "x-axis", "y-axis", "legend", "tooltip"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(html.contains("1753 - 1756: base temperature 8.66℃"));
    assert_eq!(html.matches("class=\"cell\"").count(), layout.cells.len());
    assert!(html.contains("data-year=\"1753\""));
    // zero-based month attribute
    assert!(html.contains("data-month=\"0\""));
    assert!(html.contains("data-month=\"11\""));
    assert!(!html.contains("data-month=\"12\""));
    assert!(html.contains("data-temp="));
    assert!(html.contains("1756 - December"));
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("heat-map.gif");
    assert!(viz::render_to_file(&sample_layout(), &path).is_err());
    assert!(!path.exists());
}

#[test]
fn output_format_from_extension() {
    assert_eq!(OutputFormat::from_path("a.SVG"), Some(OutputFormat::Svg));
    assert_eq!(OutputFormat::from_path("a.png"), Some(OutputFormat::Png));
    assert_eq!(OutputFormat::from_path("a.htm"), Some(OutputFormat::Html));
    assert_eq!(OutputFormat::from_path("a"), None);
}

use gtv_rs::layout::describe;
use gtv_rs::palette::DEFAULT_COLORS;
use gtv_rs::{Dataset, HeatMapConfig, HeatMapRenderer, MonthlyRecord, ScaleBuilder};

fn rec(year: i32, month: u32, variance: f64) -> MonthlyRecord {
    MonthlyRecord {
        year,
        month,
        variance,
    }
}

fn fixture() -> Dataset {
    gtv_rs::storage::load_dataset(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/sample.json"
    ))
    .unwrap()
}

#[test]
fn year_scale_is_strictly_increasing() {
    let cfg = HeatMapConfig::default();
    let scales = ScaleBuilder::new(&cfg).build(&fixture()).unwrap();
    let xs: Vec<f64> = (1753..=1756).map(|y| scales.year_x(y)).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(xs[0], 0.0);
    assert!((xs[3] - cfg.width).abs() < 1e-9);
}

#[test]
fn every_temperature_lands_in_exactly_one_palette_bucket() {
    let cfg = HeatMapConfig::default();
    let ds = fixture();
    let scales = ScaleBuilder::new(&cfg).build(&ds).unwrap();

    for r in &ds.monthly_variance {
        let color = scales.color(ds.temperature(r));
        assert_eq!(DEFAULT_COLORS.iter().filter(|c| **c == color).count(), 1);
    }

    // Sweep the extent: buckets never skip or go backwards.
    let (min, max) = (scales.extent.min_temp, scales.extent.max_temp);
    let mut prev = 0;
    for i in 0..=1000 {
        let t = min + (max - min) * i as f64 / 1000.0;
        let b = scales.temp_to_color.bucket(t);
        assert!(b < DEFAULT_COLORS.len());
        assert!(b == prev || b == prev + 1, "gap at {t}");
        prev = b;
    }
    assert_eq!(scales.temp_to_color.bucket(min), 0);
    assert_eq!(scales.temp_to_color.bucket(max), DEFAULT_COLORS.len() - 1);
}

#[test]
fn legend_segments_tile_the_bar() {
    let cfg = HeatMapConfig::default();
    let layout = HeatMapRenderer::new(&cfg).render(&fixture()).unwrap();
    let segs = &layout.legend_segments;
    assert_eq!(segs.len(), cfg.colors.len());
    assert_eq!(segs[0].x, 0.0);
    for pair in segs.windows(2) {
        assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9);
    }
    let total: f64 = segs.iter().map(|s| s.width).sum();
    assert!((total - cfg.legend_width).abs() < 1e-9);
}

#[test]
fn description_reads_year_range_and_base() {
    let ds = Dataset::new(8.66, vec![rec(1753, 1, -7.38), rec(2015, 12, 1.23)]).unwrap();
    assert_eq!(describe(&ds).unwrap(), "1753 - 2015: base temperature 8.66℃");
    let layout = HeatMapRenderer::new(&HeatMapConfig::default())
        .render(&ds)
        .unwrap();
    assert_eq!(layout.description, "1753 - 2015: base temperature 8.66℃");
}

#[test]
fn single_year_maps_to_range_start() {
    let ds = Dataset::new(8.0, (1..=12).map(|m| rec(1900, m, 0.1 * m as f64)).collect()).unwrap();
    let cfg = HeatMapConfig::default();
    let layout = HeatMapRenderer::new(&cfg).render(&ds).unwrap();
    for c in &layout.cells {
        assert!(c.x.is_finite() && c.y.is_finite());
        assert_eq!(c.x, 0.0);
        assert_eq!(c.width, cfg.width);
    }
    assert_eq!(layout.x_ticks.len(), 1);
    assert_eq!(layout.x_ticks[0].label, "1900");
}

#[test]
fn rendering_twice_gives_identical_layout() {
    let cfg = HeatMapConfig::default();
    let ds = fixture();
    let renderer = HeatMapRenderer::new(&cfg);
    let a = renderer.render(&ds).unwrap();
    let b = renderer.render(&ds).unwrap();
    assert_eq!(a, b);
}

#[test]
fn month_axis_lists_all_twelve_names_top_to_bottom() {
    let layout = HeatMapRenderer::new(&HeatMapConfig::default())
        .render(&fixture())
        .unwrap();
    let labels: Vec<&str> = layout.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(labels[0], "January");
    assert_eq!(labels[11], "December");
    assert!(layout.y_ticks.windows(2).all(|w| w[0].offset < w[1].offset));
}

#[test]
fn custom_palette_changes_bucket_count() {
    let cfg = HeatMapConfig::default().with_colors(DEFAULT_COLORS[..3].to_vec());
    let layout = HeatMapRenderer::new(&cfg).render(&fixture()).unwrap();
    assert_eq!(layout.legend_segments.len(), 3);
    assert_eq!(layout.legend_ticks.len(), 2);
    assert!(layout.cells.iter().all(|c| c.bucket < 3));
}

#[test]
fn single_color_palette_is_rejected() {
    let cfg = HeatMapConfig::default().with_colors(DEFAULT_COLORS[..1].to_vec());
    assert!(HeatMapRenderer::new(&cfg).render(&fixture()).is_err());
}

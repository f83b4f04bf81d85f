use gtv_rs::{Dataset, HeatMapConfig, HeatMapRenderer, MonthlyRecord, TooltipController, TooltipState};

fn controller(config: &HeatMapConfig) -> TooltipController {
    let ds = Dataset::new(
        8.66,
        vec![
            MonthlyRecord {
                year: 1753,
                month: 1,
                variance: -7.38,
            },
            MonthlyRecord {
                year: 2015,
                month: 12,
                variance: 1.23,
            },
        ],
    )
    .unwrap();
    let layout = HeatMapRenderer::new(config).render(&ds).unwrap();
    TooltipController::for_layout(&layout)
}

const DEC_2015: MonthlyRecord = MonthlyRecord {
    year: 2015,
    month: 12,
    variance: 1.23,
};

// Month label follows the row the cell sits in (record month 12 → "December").
#[test]
fn tooltip_names_the_cells_own_month() {
    let ctl = controller(&HeatMapConfig::default());
    let state = ctl.on_hover(&DEC_2015);
    let t = state.tooltip().unwrap();
    assert_eq!(t.lines[0], "2015 - December");
    assert_eq!(t.lines[1], "9.9℃");
    assert_eq!(t.lines[2], "1.2℃");
    assert_eq!(t.month_index, 11);
    assert_eq!(t.text(), "2015 - December\n9.9℃\n1.2℃");
}

#[test]
fn hover_replaces_previous_tooltip_and_unhover_hides() {
    let ctl = controller(&HeatMapConfig::default());
    let mut state = TooltipState::default();
    assert!(!state.is_visible());

    state = ctl.on_hover(&MonthlyRecord {
        year: 1753,
        month: 1,
        variance: -7.38,
    });
    assert_eq!(state.tooltip().unwrap().year, 1753);

    state = ctl.on_hover(&DEC_2015);
    assert_eq!(state.tooltip().unwrap().year, 2015);

    state = ctl.on_unhover();
    assert_eq!(state, TooltipState::Hidden);
}

#[test]
fn anchor_is_offset_from_cell_corner() {
    let cfg = HeatMapConfig::default();
    let ctl = controller(&cfg);
    let state = ctl.on_hover(&DEC_2015);
    let t = state.tooltip().unwrap();
    // Last year sits at the right edge, December in the last row.
    assert!((t.anchor_x - (cfg.width + 80.0)).abs() < 1e-9);
    assert!((t.anchor_y - (cfg.height * 11.0 / 12.0 - 40.0)).abs() < 1e-9);
}

#[test]
fn german_locale_uses_decimal_comma() {
    let ctl = controller(&HeatMapConfig::default().with_locale("de"));
    let state = ctl.on_hover(&DEC_2015);
    let t = state.tooltip().unwrap();
    assert_eq!(t.lines[1], "9,9℃");
    assert_eq!(t.lines[2], "1,2℃");
}

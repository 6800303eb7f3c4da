//! Unit tests for the grid style compilers.

use std::borrow::Cow;

use super::{
    AlignContent, AlignItems, ConfigurationError, CssValue, GapValue, GridAutoFlow, GridItemStyle,
    GridLine, GridPlacement, GridStyle, SpacingPreset, StyleMap, StyleValue, TrackTemplate,
};
use crate::context::GridCx;
use crate::responsive::{Breakpoint, BreakpointMap};
use crate::style::unit::{GridGap, UnitExt};

fn cx(bp: Breakpoint) -> GridCx {
    GridCx::new(bp)
}

fn css(style: &StyleMap, name: &str) -> String {
    style
        .get(name)
        .unwrap_or_else(|| panic!("property `{name}` missing"))
        .to_string()
}

#[test]
fn container_always_emits_display_and_gap() {
    let style = GridStyle::new().compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "display"), "grid");
    assert_eq!(css(&style, "gap"), "16px");
    assert_eq!(style.len(), 2);
}

#[test]
fn container_column_templates() {
    let style = GridStyle::new().columns(3).compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-template-columns"), "repeat(3, 1fr)");

    let style = GridStyle::new()
        .columns("200px 1fr")
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-template-columns"), "200px 1fr");

    let style = GridStyle::new()
        .columns(TrackTemplate::tracks([2.fr(), "200px".into(), 1.fr()]))
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-template-columns"), "2fr 200px 1fr");
}

#[test]
fn auto_fit_uses_default_bounds() {
    let style = GridStyle::new()
        .columns("auto-fit")
        .compute(&cx(Breakpoint::Base));
    assert_eq!(
        css(&style, "grid-template-columns"),
        "repeat(auto-fit, minmax(250px, 1fr))"
    );
}

#[test]
fn auto_fit_override_uses_configured_min_width() {
    let style = GridStyle::new()
        .columns("auto-fit")
        .min_item_width("300px")
        .compute(&cx(Breakpoint::Base));
    assert_eq!(
        css(&style, "grid-template-columns"),
        "repeat(auto-fit, minmax(300px, 1fr))"
    );
}

#[test]
fn auto_fill_override_uses_both_bounds() {
    let style = GridStyle::new()
        .columns("auto-fill")
        .min_item_width("10rem")
        .max_item_width("2fr")
        .compute(&cx(Breakpoint::Base));
    assert_eq!(
        css(&style, "grid-template-columns"),
        "repeat(auto-fill, minmax(10rem, 2fr))"
    );
}

#[test]
fn gap_accepts_numbers_strings_and_presets() {
    let style = GridStyle::new().gap(24.0).compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "gap"), "24px");

    let style = GridStyle::new().gap("1.5rem").compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "gap"), "1.5rem");

    let style = GridStyle::new()
        .gap(SpacingPreset::Tight)
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "gap"), "8px");
}

#[test]
fn preset_gap_ignores_the_breakpoint() {
    let grid = GridStyle::new().gap(SpacingPreset::Wide);
    for bp in Breakpoint::ALL {
        assert_eq!(css(&grid.compute(&cx(bp)), "gap"), "32px");
    }
}

#[test]
fn string_gap_matching_a_preset_token_is_that_preset() {
    assert_eq!(
        GapValue::from("relaxed"),
        GapValue::Preset(SpacingPreset::Relaxed)
    );
    assert_eq!(
        GapValue::from("12px"),
        GapValue::Value(GridGap::Custom(Cow::Borrowed("12px")).into())
    );
}

#[test]
fn unconfigured_gap_falls_back_to_ambient_preset() {
    let cx = GridCx::new(Breakpoint::Base).with_spacing(SpacingPreset::Relaxed);
    let style = GridStyle::new().compute(&cx);
    assert_eq!(css(&style, "gap"), "24px");
}

#[test]
fn unresolved_responsive_gap_falls_back_to_ambient_preset() {
    // The gap is only defined from `lg` up; below that the ambient
    // preset applies.
    let grid = GridStyle::new().gap(GapValue::Value(
        BreakpointMap::new().lg(GridGap::Px(4.0)).into(),
    ));
    let style = grid.compute(&cx(Breakpoint::Md));
    assert_eq!(css(&style, "gap"), "16px");
    let style = grid.compute(&cx(Breakpoint::Lg));
    assert_eq!(css(&style, "gap"), "4px");
}

#[test]
fn responsive_columns_cascade_per_breakpoint() {
    let grid = GridStyle::new().columns(BreakpointMap::new().base(1).md(2).xl(4));
    assert_eq!(
        css(&grid.compute(&cx(Breakpoint::Base)), "grid-template-columns"),
        "repeat(1, 1fr)"
    );
    assert_eq!(
        css(&grid.compute(&cx(Breakpoint::Lg)), "grid-template-columns"),
        "repeat(2, 1fr)"
    );
    assert_eq!(
        css(&grid.compute(&cx(Breakpoint::Xxl)), "grid-template-columns"),
        "repeat(4, 1fr)"
    );
}

#[test]
fn responsive_value_defined_only_above_is_omitted() {
    let grid = GridStyle::new().rows(BreakpointMap::new().lg(2));
    let style = grid.compute(&cx(Breakpoint::Sm));
    assert!(style.get("grid-template-rows").is_none());
}

#[test]
fn responsive_builder_overrides_fold_into_the_maps() {
    let grid = GridStyle::new()
        .columns(1)
        .gap(8.0)
        .responsive(Breakpoint::Md, |s| s.columns(3).gap(24.0));

    let style = grid.compute(&cx(Breakpoint::Sm));
    assert_eq!(css(&style, "grid-template-columns"), "repeat(1, 1fr)");
    assert_eq!(css(&style, "gap"), "8px");

    let style = grid.compute(&cx(Breakpoint::Lg));
    assert_eq!(css(&style, "grid-template-columns"), "repeat(3, 1fr)");
    assert_eq!(css(&style, "gap"), "24px");
}

#[test]
fn each_property_resolves_independently() {
    let grid = GridStyle::new()
        .columns(BreakpointMap::new().base(1).lg(3))
        .row_gap(BreakpointMap::new().md(GridGap::Px(4.0)))
        .align_items(AlignItems::Center);

    let style = grid.compute(&cx(Breakpoint::Md));
    assert_eq!(css(&style, "grid-template-columns"), "repeat(1, 1fr)");
    assert_eq!(css(&style, "row-gap"), "4px");
    assert_eq!(css(&style, "align-items"), "center");
}

#[test]
fn optional_container_properties_are_emitted_when_set() {
    let style = GridStyle::new()
        .columns(2)
        .rows("auto")
        .areas("\"header header\" \"nav main\"")
        .column_gap(GridGap::Px(4.0))
        .row_gap("2%")
        .auto_flow(GridAutoFlow::ColumnDense)
        .auto_rows("minmax(100px, auto)")
        .auto_columns("1fr")
        .justify_items(AlignItems::Start)
        .align_items(AlignItems::Baseline)
        .justify_content(AlignContent::SpaceBetween)
        .align_content(AlignContent::SpaceEvenly)
        .aspect_ratio("16 / 9")
        .compute(&cx(Breakpoint::Base));

    assert_eq!(css(&style, "grid-template-rows"), "auto");
    assert_eq!(
        css(&style, "grid-template-areas"),
        "\"header header\" \"nav main\""
    );
    assert_eq!(css(&style, "column-gap"), "4px");
    assert_eq!(css(&style, "row-gap"), "2%");
    assert_eq!(css(&style, "grid-auto-flow"), "column dense");
    assert_eq!(css(&style, "grid-auto-rows"), "minmax(100px, auto)");
    assert_eq!(css(&style, "grid-auto-columns"), "1fr");
    assert_eq!(css(&style, "justify-items"), "start");
    assert_eq!(css(&style, "align-items"), "baseline");
    assert_eq!(css(&style, "justify-content"), "space-between");
    assert_eq!(css(&style, "align-content"), "space-evenly");
    assert_eq!(css(&style, "aspect-ratio"), "16 / 9");
}

#[test]
fn raw_overrides_always_win() {
    let style = GridStyle::new()
        .columns(2)
        .gap(8.0)
        .raw("gap", "3px")
        .raw("background", "red")
        .compute(&cx(Breakpoint::Base));

    assert_eq!(css(&style, "gap"), "3px");
    assert_eq!(css(&style, "background"), "red");
    assert_eq!(css(&style, "grid-template-columns"), "repeat(2, 1fr)");
}

#[test]
fn compilation_is_idempotent() {
    let grid = GridStyle::new()
        .columns(BreakpointMap::new().base(1).md(3))
        .gap(SpacingPreset::Tight)
        .raw("outline", "1px dashed");
    let cx = cx(Breakpoint::Md);
    assert_eq!(grid.compute(&cx), grid.compute(&cx));
}

#[test]
fn item_span_shorthand_expands() {
    let style = GridItemStyle::new()
        .span(2)
        .row_span(3)
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-column"), "span 2");
    assert_eq!(css(&style, "grid-row"), "span 3");
}

#[test]
fn explicit_placement_beats_span_shorthand() {
    let style = GridItemStyle::new()
        .span(2)
        .column(GridPlacement::between(1, 3))
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-column"), "1 / 3");

    let style = GridItemStyle::new()
        .row_span(4)
        .row(GridPlacement::line(2))
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-row"), "2");
}

#[test]
fn item_discrete_placement_and_alignment() {
    let style = GridItemStyle::new()
        .column_start(GridPlacement::line(2))
        .column_end(GridPlacement::span(2))
        .row_start(GridPlacement::line(1))
        .row_end(GridPlacement::line(-1))
        .area("main")
        .order(0)
        .justify_self(AlignItems::End)
        .align_self(AlignItems::Stretch)
        .aspect_ratio("1 / 1")
        .compute(&cx(Breakpoint::Base));

    assert_eq!(css(&style, "grid-column-start"), "2");
    assert_eq!(css(&style, "grid-column-end"), "span 2");
    assert_eq!(css(&style, "grid-row-start"), "1");
    assert_eq!(css(&style, "grid-row-end"), "-1");
    assert_eq!(css(&style, "grid-area"), "main");
    // order 0 is explicit configuration, not absence
    assert_eq!(css(&style, "order"), "0");
    assert_eq!(css(&style, "justify-self"), "end");
    assert_eq!(css(&style, "align-self"), "stretch");
    assert_eq!(css(&style, "aspect-ratio"), "1 / 1");
}

#[test]
fn item_responsive_placement() {
    let item = GridItemStyle::new()
        .span(1)
        .responsive(Breakpoint::Lg, |s| s.span(2));
    assert_eq!(
        css(&item.compute(&cx(Breakpoint::Md)), "grid-column"),
        "span 1"
    );
    assert_eq!(
        css(&item.compute(&cx(Breakpoint::Xl)), "grid-column"),
        "span 2"
    );
}

#[test]
fn item_raw_overrides_win() {
    let style = GridItemStyle::new()
        .span(2)
        .raw("grid-column", "1 / -1")
        .compute(&cx(Breakpoint::Base));
    assert_eq!(css(&style, "grid-column"), "1 / -1");
}

#[test]
fn empty_item_compiles_to_an_empty_map() {
    let style = GridItemStyle::new().compute(&cx(Breakpoint::Xxl));
    assert!(style.is_empty());
}

#[test]
fn placement_grammar_parses() {
    assert_eq!("auto".parse::<GridPlacement>(), Ok(GridPlacement::auto()));
    assert_eq!("3".parse::<GridPlacement>(), Ok(GridPlacement::line(3)));
    assert_eq!("-1".parse::<GridPlacement>(), Ok(GridPlacement::line(-1)));
    assert_eq!("span 2".parse::<GridPlacement>(), Ok(GridPlacement::span(2)));
    assert_eq!(
        "1 / 3".parse::<GridPlacement>(),
        Ok(GridPlacement::between(1, 3))
    );
    assert_eq!(
        "1 / span 2".parse::<GridPlacement>(),
        Ok(GridPlacement::Pair(GridLine::Line(1), GridLine::Span(2)))
    );
}

#[test]
fn malformed_placements_are_rejected() {
    for bad in ["", "spam 2", "span", "span 0", "0", "1 / 2 / 3", "one"] {
        assert!(
            matches!(
                bad.parse::<GridPlacement>(),
                Err(ConfigurationError::MalformedPlacement(_))
            ),
            "expected `{bad}` to be rejected"
        );
    }
}

#[test]
fn unknown_spacing_presets_are_rejected() {
    assert_eq!(SpacingPreset::parse("tight"), Ok(SpacingPreset::Tight));
    assert_eq!(
        SpacingPreset::parse("roomy"),
        Err(ConfigurationError::UnknownSpacingPreset("roomy".into()))
    );
}

#[test]
fn spacing_preset_table() {
    let expected = [
        (SpacingPreset::None, "0px"),
        (SpacingPreset::Tight, "8px"),
        (SpacingPreset::Standard, "16px"),
        (SpacingPreset::Relaxed, "24px"),
        (SpacingPreset::Wide, "32px"),
    ];
    for (preset, css) in expected {
        assert_eq!(preset.to_css(), css);
    }
}

#[test]
fn style_map_apply_prefers_the_overlay() {
    let base = StyleMap::new().with("gap", "8px").with("display", "grid");
    let over = StyleMap::new().with("gap", "0px");
    let merged = base.apply(over);
    assert_eq!(merged.get("gap"), Some(&StyleValue::Str("0px".into())));
    assert_eq!(merged.get("display"), Some(&StyleValue::Str("grid".into())));
}

#[cfg(feature = "serde")]
#[test]
fn style_map_serializes_as_a_css_object() {
    let style = GridItemStyle::new()
        .span(2)
        .order(5)
        .compute(&cx(Breakpoint::Base));
    let json = serde_json::to_value(&style).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "grid-column": "span 2", "order": 5.0 })
    );
}

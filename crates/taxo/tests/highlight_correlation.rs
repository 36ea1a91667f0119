//! Integration tests for hover highlight correlation.

use taxo::{
    Channel, ChannelSpec, Engine, HighlightMode, HighlightState, Resolution, ResolutionContext,
    Taxonomy, TaxonomyLevel, TaxonomySet, TaxonomyValue, correlate,
};

fn resolution() -> Resolution {
    let engine = Engine::new();
    let ctx = ResolutionContext::builder()
        .manual(
            [("TAX_Product".to_string(), TaxonomyValue::open("laptop"))]
                .into_iter()
                .collect(),
        )
        .build();
    let set = TaxonomySet::builder()
        .tags(ChannelSpec::new(
            Taxonomy::builder()
                .level_1(TaxonomyLevel::new("[TAX_Product:open] [CAMP_Brand:open]"))
                .level_2(TaxonomyLevel::new("[TAX_Product:open]"))
                .build(),
        ))
        .platform(ChannelSpec::new(
            Taxonomy::builder()
                .level_1(TaxonomyLevel::new("[[TAX_Product:open]]"))
                .build(),
        ))
        .media_export(ChannelSpec::new(
            Taxonomy::builder()
                .level_1(TaxonomyLevel::new("[CAMP_Brand:open]"))
                .build(),
        ))
        .build();
    engine.resolve(&set, &ctx)
}

// =============================================================================
// State transitions
// =============================================================================

#[test]
fn default_state_is_none() {
    let state = HighlightState::none();
    assert_eq!(state.mode, HighlightMode::None);
    assert!(state.active_field.is_none());
    assert!(state.active_variable.is_none());
}

#[test]
fn field_hover_sets_field_and_variable() {
    let state = HighlightState::field_hover("product_field", "TAX_Product");
    assert_eq!(state.mode, HighlightMode::Field);
    assert_eq!(state.active_field.as_deref(), Some("product_field"));
    assert_eq!(state.active_variable.as_deref(), Some("TAX_Product"));
}

#[test]
fn preview_hover_has_no_field() {
    let state = HighlightState::preview_hover("TAX_Product");
    assert_eq!(state.mode, HighlightMode::Preview);
    assert!(state.active_field.is_none());
    assert_eq!(state.active_variable.as_deref(), Some("TAX_Product"));
}

#[test]
fn clear_returns_to_none() {
    let mut state = HighlightState::field_hover("product_field", "TAX_Product");
    state.clear();
    assert_eq!(state, HighlightState::none());
    assert!(!state.emphasizes("TAX_Product"));
}

#[test]
fn emphasis_rule_is_name_equality() {
    let state = HighlightState::field_hover("product_field", "TAX_Product");
    assert!(state.emphasizes("TAX_Product"));
    assert!(!state.emphasizes("TAX_Location"));
    assert!(!HighlightState::none().emphasizes("TAX_Product"));
}

// =============================================================================
// Cross-channel symmetry
// =============================================================================

#[test]
fn every_occurrence_emphasized_simultaneously() {
    let resolution = resolution();
    let state = HighlightState::field_hover("product_field", "TAX_Product");
    let highlights = correlate(&resolution, &state);

    // One entry per resolved channel, in scan order.
    let channels: Vec<Channel> = highlights.iter().map(|h| h.channel).collect();
    assert_eq!(
        channels,
        vec![Channel::Tags, Channel::Platform, Channel::MediaExport]
    );

    for (highlight, resolved) in highlights.iter().zip(&resolution.channels) {
        for (level_flags, level) in highlight.levels.iter().zip(&resolved.levels) {
            assert_eq!(level_flags.segments.len(), level.segments.len());
            for (flag, segment) in level_flags.segments.iter().zip(&level.segments) {
                let expected = segment
                    .as_token()
                    .is_some_and(|token| token.variable == "TAX_Product");
                assert_eq!(*flag, expected);
            }
        }
    }

    assert!(highlights[0].contains_active);
    assert!(highlights[1].contains_active);
    assert!(!highlights[2].contains_active);
}

#[test]
fn clearing_drops_every_emphasis() {
    let resolution = resolution();
    let highlights = correlate(&resolution, &HighlightState::none());
    for highlight in &highlights {
        assert!(!highlight.contains_active);
        for level in &highlight.levels {
            assert!(level.segments.iter().all(|&flag| !flag));
        }
    }
}

#[test]
fn emphasis_ignores_format_and_bracket_style() {
    let resolution = resolution();
    let state = HighlightState::preview_hover("TAX_Product");
    let highlights = correlate(&resolution, &state);
    // The platform channel renders TAX_Product as a double-bracket token.
    assert!(highlights[1].contains_active);
    assert!(highlights[1].segment(1, 0));
}

// =============================================================================
// Presence scans the full taxonomy, not just displayed levels
// =============================================================================

#[test]
fn presence_covers_deep_levels() {
    let engine = Engine::new();
    let set = TaxonomySet::builder()
        .tags(ChannelSpec::new(
            Taxonomy::builder()
                .level_1(TaxonomyLevel::new("static text"))
                .level_6(TaxonomyLevel::new("[TAX_Deep:open]"))
                .build(),
        ))
        .build();
    let resolution = engine.resolve(&set, &ResolutionContext::default());

    let channel = resolution.channel(Channel::Tags).unwrap();
    assert!(channel.contains_variable("TAX_Deep"));
    assert!(!channel.contains_variable("TAX_Product"));

    let highlights = correlate(&resolution, &HighlightState::field_hover("deep", "TAX_Deep"));
    assert!(highlights[0].contains_active);
    assert!(highlights[0].segment(6, 0));
}

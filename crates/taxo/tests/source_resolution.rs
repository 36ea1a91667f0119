//! Integration tests for variable classification and raw-value precedence.

use taxo::{Format, ListId, ResolutionContext, Source, SourceTable, TaxonomyValue, values};

// =============================================================================
// Classification
// =============================================================================

#[test]
fn prefix_conventions() {
    let table = SourceTable::new();
    assert_eq!(table.source_of("CAMP_Brand"), Source::Campaign);
    assert_eq!(table.source_of("TAC_Market"), Source::Tactic);
    assert_eq!(table.source_of("PLAC_Site"), Source::Placement);
    assert_eq!(table.source_of("CREA_Size"), Source::Creative);
    assert_eq!(table.source_of("TAX_Product"), Source::Manual);
}

#[test]
fn explicit_binding_beats_prefix() {
    let mut table = SourceTable::new();
    table.bind("CAMP_Quarter", Source::Manual);
    assert_eq!(table.source_of("CAMP_Quarter"), Source::Manual);
}

#[test]
fn binding_carries_reference_list() {
    let mut table = SourceTable::new();
    table.bind_with_list("TAX_Product", Source::Manual, ListId::new("products"));
    assert_eq!(table.list_of("TAX_Product"), Some(ListId::new("products")));
    assert_eq!(table.list_of("TAX_Other"), None);
}

#[test]
fn known_names_are_sorted() {
    let mut table = SourceTable::new();
    table.bind("Zeta", Source::Manual);
    table.bind("Alpha", Source::Manual);
    assert_eq!(table.known_names(), vec!["Alpha", "Zeta"]);
}

// =============================================================================
// Precedence: creative > placement > tactic > campaign
// =============================================================================

#[test]
fn placement_beats_tactic() {
    let ctx = ResolutionContext::builder()
        .tactic(values! { "TAC_Market" => "from-tactic" })
        .placement(values! { "TAC_Market" => "from-placement" })
        .build();
    let resolved = SourceTable::new().resolve("TAC_Market", Format::Code, &ctx);
    assert_eq!(resolved.text, "from-placement");
    assert_eq!(resolved.source, Source::Tactic);
}

#[test]
fn empty_placement_falls_through_to_tactic() {
    let ctx = ResolutionContext::builder()
        .tactic(values! { "TAC_Market" => "from-tactic" })
        .placement(values! { "TAC_Market" => "" })
        .build();
    let resolved = SourceTable::new().resolve("TAC_Market", Format::Code, &ctx);
    assert_eq!(resolved.text, "from-tactic");
}

#[test]
fn creative_beats_everything() {
    let ctx = ResolutionContext::builder()
        .campaign(values! { "CAMP_Brand" => "campaign" })
        .tactic(values! { "CAMP_Brand" => "tactic" })
        .placement(values! { "CAMP_Brand" => "placement" })
        .creative(values! { "CAMP_Brand" => "creative" })
        .build();
    let resolved = SourceTable::new().resolve("CAMP_Brand", Format::Code, &ctx);
    assert_eq!(resolved.text, "creative");
    assert_eq!(resolved.source, Source::Campaign);
}

#[test]
fn campaign_is_the_last_layer() {
    let ctx = ResolutionContext::builder()
        .campaign(values! { "CAMP_Brand" => "ACME" })
        .build();
    let resolved = SourceTable::new().resolve("CAMP_Brand", Format::Code, &ctx);
    assert_eq!(resolved.text, "ACME");
}

#[test]
fn missing_everywhere_resolves_empty() {
    let ctx = ResolutionContext::default();
    let resolved = SourceTable::new().resolve("CAMP_Brand", Format::Code, &ctx);
    assert!(resolved.is_empty());
    assert_eq!(resolved.source, Source::Campaign);
}

// =============================================================================
// Manual entries
// =============================================================================

fn manual_ctx(name: &str, value: TaxonomyValue) -> ResolutionContext {
    ResolutionContext::builder()
        .manual([(name.to_string(), value)].into_iter().collect())
        .build()
}

#[test]
fn manual_open_value() {
    let ctx = manual_ctx("TAX_Note", TaxonomyValue::open("summer push"));
    let resolved = SourceTable::new().resolve("TAX_Note", Format::Open, &ctx);
    assert_eq!(resolved.text, "summer push");
    assert_eq!(resolved.source, Source::Manual);
}

#[test]
fn manual_coded_value() {
    let ctx = manual_ctx("TAX_Product", TaxonomyValue::coded("P1"));
    let resolved = SourceTable::new().resolve("TAX_Product", Format::Code, &ctx);
    assert_eq!(resolved.text, "P1");
}

#[test]
fn manual_missing_resolves_empty() {
    let ctx = ResolutionContext::default();
    let resolved = SourceTable::new().resolve("TAX_Product", Format::Open, &ctx);
    assert!(resolved.is_empty());
    assert_eq!(resolved.source, Source::Manual);
}

#[test]
fn open_format_reads_open_value_coded_formats_read_shortcode() {
    let value = TaxonomyValue::builder()
        .value("Portable")
        .shortcode_id("P1")
        .open_value("typed text")
        .build();
    assert_eq!(value.raw_for(Format::Open), "typed text");
    assert_eq!(value.raw_for(Format::Code), "P1");
    assert_eq!(value.raw_for(Format::DisplayFr), "P1");
}

#[test]
fn manual_entries_do_not_leak_into_object_lookup() {
    let ctx = manual_ctx("CAMP_Brand", TaxonomyValue::open("typed"));
    // CAMP_Brand classifies as campaign; the manual entry is not consulted.
    let resolved = SourceTable::new().resolve("CAMP_Brand", Format::Open, &ctx);
    assert!(resolved.is_empty());
}

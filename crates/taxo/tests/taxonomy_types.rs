//! Integration tests for the data-model types and their document-store
//! serde shapes.

use taxo::{
    Channel, ChannelSpec, Engine, Format, ResolutionContext, Source, Taxonomy, TaxonomyLevel,
    TaxonomySet, TaxonomyValue, VariableId, values,
};

// =============================================================================
// Taxonomy levels
// =============================================================================

#[test]
fn levels_iterate_in_slot_order() {
    let taxonomy = Taxonomy::builder()
        .level_3(TaxonomyLevel::new("[c:code]"))
        .level_1(TaxonomyLevel::new("[a:code]"))
        .build();
    let slots: Vec<u8> = taxonomy.levels().map(|(slot, _)| slot).collect();
    assert_eq!(slots, vec![1, 3]);
}

#[test]
fn level_accessor_by_slot() {
    let taxonomy = Taxonomy::builder()
        .level_2(TaxonomyLevel::new("[x:open]").with_title("Second"))
        .build();
    assert_eq!(
        taxonomy.level(2).and_then(|l| l.title.as_deref()),
        Some("Second")
    );
    assert!(taxonomy.level(1).is_none());
    assert!(taxonomy.level(7).is_none());
}

#[test]
fn set_iterates_configured_channels_in_fixed_order() {
    let set = TaxonomySet::builder()
        .media_export(ChannelSpec::default())
        .tags(ChannelSpec::default())
        .build();
    let channels: Vec<Channel> = set.channels().map(|(channel, _)| channel).collect();
    assert_eq!(channels, vec![Channel::Tags, Channel::MediaExport]);
}

// =============================================================================
// Identifiers and names
// =============================================================================

#[test]
fn variable_id_is_stable() {
    const PRODUCT: VariableId = VariableId::from_name("TAX_Product");
    assert_eq!(VariableId::from_name("TAX_Product"), PRODUCT);
    assert_ne!(VariableId::from_name("TAX_Location"), PRODUCT);
}

#[test]
fn display_names() {
    assert_eq!(Channel::MediaExport.as_str(), "media-export");
    assert_eq!(Source::Creative.to_string(), "creative");
    assert_eq!(Format::DisplayFr.to_string(), "display_fr");
    assert_eq!(Format::parse("display_en"), Format::DisplayEn);
    assert_eq!(Format::parse("anything else"), Format::Open);
}

// =============================================================================
// Document-store serde shapes
// =============================================================================

#[test]
fn taxonomy_deserializes_from_document_json() {
    let taxonomy: Taxonomy = serde_json::from_str(
        r#"{
            "name": "Display 2026",
            "level_1": { "template": "[CAMP_Brand:open]", "title": "Brand" },
            "level_2": { "template": "[TAX_Product:display_en]" }
        }"#,
    )
    .unwrap();
    assert_eq!(taxonomy.name.as_deref(), Some("Display 2026"));
    assert_eq!(taxonomy.levels().count(), 2);

    let ctx = ResolutionContext::builder()
        .campaign(values! { "CAMP_Brand" => "ACME" })
        .build();
    let resolved = Engine::new().resolve_channel(Channel::Tags, &ChannelSpec::new(taxonomy), &ctx);
    assert_eq!(resolved.levels[0].text, "ACME");
}

#[test]
fn channel_spec_separator_defaults_to_underscore() {
    let spec: ChannelSpec = serde_json::from_str(r#"{ "taxonomy": {} }"#).unwrap();
    assert_eq!(spec.separator, "_");
    assert_eq!(ChannelSpec::default().separator, "_");
}

#[test]
fn taxonomy_value_deserializes() {
    let value: TaxonomyValue = serde_json::from_str(
        r#"{ "value": "Portable", "source": "manual", "format": "display_fr", "shortcode_id": "P1" }"#,
    )
    .unwrap();
    assert_eq!(value.raw_for(Format::DisplayFr), "P1");
    assert_eq!(value.source, Source::Manual);
    assert_eq!(value.format, Format::DisplayFr);
    assert!(value.open_value.is_none());
}

#[test]
fn context_deserializes_with_missing_maps() {
    let ctx: ResolutionContext =
        serde_json::from_str(r#"{ "campaign": { "CAMP_Brand": "ACME" } }"#).unwrap();
    assert_eq!(ctx.layered("CAMP_Brand"), Some("ACME"));
    assert!(ctx.manual.is_empty());
}

#[test]
fn channel_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Channel::MediaExport).unwrap(),
        r#""media-export""#
    );
}

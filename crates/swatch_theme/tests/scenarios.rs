use pretty_assertions::assert_eq;
use serde_json::json;
use swatch_theme::{
    merge, resolve_theme, resolve_theme_with, validate, ColorRole, ColorValue, MissingRef, Mode,
    PartialTheme, Ramp, ResolveOptions, Section, Severity, Theme,
};

fn partial(value: serde_json::Value) -> PartialTheme {
    PartialTheme::from_value(value).unwrap()
}

/// Default theme with a one-step `brand` ramp bound to `primary`
fn brand_theme() -> Theme {
    let mut theme = Theme::default();
    let mut ramp = Ramp::new();
    ramp.insert(500, "#112233".to_string());
    theme.base.color.collection.insert("brand".into(), ramp);
    theme.color.set(ColorRole::Primary, "brand");
    theme
        .palette
        .light
        .surface
        .get_mut("primary")
        .unwrap()
        .insert("default".into(), ColorValue::role(ColorRole::Primary, 500));
    theme
}

#[test]
fn brand_ramp_resolves_through_primary() {
    let theme = brand_theme();
    let resolved = resolve_theme(Mode::Light, &theme);
    assert_eq!(
        resolved.palette.hex(Section::Surface, "primary", "default"),
        Some("#112233")
    );
}

#[test]
fn removing_brand_ramp_breaks_every_dependent_token() {
    let mut theme = brand_theme();
    theme.base.color.collection.shift_remove("brand");

    let issues = validate(&theme);
    assert!(issues.iter().any(|issue| issue.path == "color.primary"));

    for mode in Mode::ALL {
        let resolved = resolve_theme(mode, &theme);
        let mut dependent = 0;
        for (section, group, variant, value) in theme.palette(mode).tokens() {
            let hex = resolved.palette.get(section, group, variant).unwrap();
            if value.color == "primary" {
                dependent += 1;
                assert_eq!(
                    hex.missing(),
                    Some(&MissingRef::ColorCollection {
                        name: "brand".into()
                    }),
                    "{mode}.{section}.{group}.{variant}"
                );
            } else {
                assert!(hex.is_resolved(), "{mode}.{section}.{group}.{variant}");
            }
        }
        assert!(dependent > 0);
    }
}

#[test]
fn single_role_edit_leaves_everything_else_byte_identical() {
    let base = Theme::default();
    let merged = merge(&partial(json!({ "color": { "primary": "accent" } })), &base);

    let mut before = serde_json::to_value(&base).unwrap();
    let mut after = serde_json::to_value(&merged).unwrap();
    assert_eq!(after["color"]["primary"], "accent");

    before["color"]["primary"] = json!(null);
    after["color"]["primary"] = json!(null);
    assert_eq!(
        serde_json::to_string(&after).unwrap(),
        serde_json::to_string(&before).unwrap()
    );
}

#[test]
fn merge_identity_and_idempotence() {
    let base = brand_theme();
    assert_eq!(merge(&PartialTheme::new(), &base), base);
    assert_eq!(merge(&Theme::empty_partial(), &base), base);

    let edit = partial(json!({
        "size": { "spacing": { "md": 600, "5xl": 1500 } },
        "palette": { "dark": { "surface": { "page": { "default": { "color": "foundation.white" } } } } }
    }));
    let once = merge(&edit, &base);
    assert_eq!(merge(&edit, &once), once);
    assert_eq!(once.size.spacing.get("md"), Some(&600));
    assert_eq!(once.size.spacing.get("5xl"), Some(&1500));
}

#[test]
fn fields_outside_the_partial_are_untouched() {
    let base = Theme::default();
    let edit = partial(json!({ "font": { "weight": { "h2": "medium" } } }));
    let merged = merge(&edit, &base);

    assert_eq!(merged.font.weight.h2, "medium");
    assert_eq!(merged.font.weight.h1, base.font.weight.h1);
    assert_eq!(merged.font.family, base.font.family);
    assert_eq!(merged.base, base.base);
    assert_eq!(merged.color, base.color);
    assert_eq!(merged.size, base.size);
    assert_eq!(merged.palette, base.palette);
}

#[test]
fn valid_themes_resolve_totally() {
    let theme = brand_theme();
    let mut theme = merge(
        &partial(json!({ "base": { "color": { "collection": { "brand": {
            "100": "#F0F0FF", "150": "#E0E0FF", "200": "#D0D0FF", "300": "#B0B0FF",
            "400": "#9090FF", "500": "#112233", "600": "#0F1E2E", "700": "#0D1A28",
            "800": "#0B1622", "900": "#09121C", "1000": "#070E16", "1100": "#050A10",
            "1200": "#03060A"
        } } } } })),
        &theme,
    );
    theme.name = Some("Brand".into());
    assert!(validate(&theme).is_empty());

    for mode in Mode::ALL {
        let resolved = resolve_theme(mode, &theme);
        assert!(resolved.is_complete(), "mode={mode}");
        for (_, _, _, hex) in resolved.palette.iter() {
            assert!(hex.value().is_some_and(|hex| !hex.is_empty()));
        }
    }
}

#[test]
fn foundation_precedence_over_stray_scale() {
    let mut theme = Theme::default();
    theme.base.color.foundations.white = "#FDFDFD".into();
    theme.palette.light.surface.get_mut("page").unwrap().insert(
        "default".into(),
        ColorValue {
            color: "foundation.white".into(),
            scale: Some(700),
        },
    );

    let lenient = resolve_theme(Mode::Light, &theme);
    assert_eq!(
        lenient.palette.hex(Section::Surface, "page", "default"),
        Some("#FDFDFD")
    );

    let strict = resolve_theme_with(Mode::Light, &theme, ResolveOptions::strict());
    assert!(strict
        .palette
        .get(Section::Surface, "page", "default")
        .and_then(|hex| hex.missing())
        .is_some());

    let issues = validate(&theme);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn mid_edit_states_are_held_not_rejected() {
    let base = Theme::default();
    let typing = merge(&partial(json!({ "color": { "secondary": "vio" } })), &base);
    assert_eq!(typing.color.secondary, "vio");
    assert!(!validate(&typing).is_empty());

    let done = merge(&partial(json!({ "color": { "secondary": "violet" } })), &typing);
    assert!(validate(&done).is_empty());
}

#[test]
fn out_of_range_scales_survive_merge_and_are_reported() {
    let base = Theme::default();
    for scale in [70000, -100] {
        let merged = merge(
            &partial(json!({ "palette": { "light": { "surface": { "primary": {
                "default": { "scale": scale }
            } } } } })),
            &base,
        );
        let token = merged
            .palette
            .light
            .token(Section::Surface, "primary", "default")
            .unwrap();
        assert_eq!(token.scale, Some(scale));

        let issues = validate(&merged);
        let issue = issues
            .iter()
            .find(|issue| issue.path == "palette.light.surface.primary.default.scale")
            .expect("scale issue");
        assert_eq!(issue.severity, Severity::Error);

        let resolved = resolve_theme(Mode::Light, &merged);
        assert_eq!(
            resolved
                .palette
                .get(Section::Surface, "primary", "default")
                .and_then(|hex| hex.missing()),
            Some(&MissingRef::InvalidScale { scale })
        );
    }
}

#[test]
fn out_of_range_scale_loads_from_json() {
    let mut json = serde_json::to_value(Theme::default()).unwrap();
    json["palette"]["dark"]["text"]["primary"]["default"]["scale"] = json!(70000);

    let theme = Theme::from_json_str(&json.to_string()).unwrap();
    assert!(validate(&theme)
        .iter()
        .any(|issue| issue.path == "palette.dark.text.primary.default.scale"));
}

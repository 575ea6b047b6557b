#![cfg(feature = "serde")]

use tinct_style::prelude::*;

#[test]
fn theme_config_from_json() {
    let config: ThemeConfig = serde_json::from_str(
        r##"{
            "light": { "background": "#FAFAFA", "foreground": "#333333" },
            "dark": { "fill": "rgb(30, 30, 46)" },
            "typography": { "font_family": "Inter", "font_weight": 600, "text_transform": "uppercase" },
            "border": { "width": { "top": { "px": 2.0 } }, "style": "dashed" }
        }"##,
    )
    .unwrap();

    let theme = Theme::from_config(&config).unwrap();

    let light = theme.palettes().base(ThemeMode::Light);
    assert_eq!(light.background(), Color::rgb(0xFA, 0xFA, 0xFA));
    assert_eq!(light.foreground(), Color::rgb(0x33, 0x33, 0x33));
    assert_eq!(theme.palettes().base(ThemeMode::Dark).fill(), Color::rgb(30, 30, 46));

    assert_eq!(theme.typography().font_weight, Some(FontWeight::SEMI_BOLD));
    assert_eq!(theme.typography().text_transform, Some(TextTransform::Uppercase));
    assert_eq!(theme.border().width.top, Some(LengthValue::px(2.0)));
    assert_eq!(theme.border().width.left, None);
    assert_eq!(theme.border().style, Some(BorderStyle::Dashed));
    assert_eq!(theme.border().focus_width(), LengthValue::px(4.0));
}

#[test]
fn invalid_color_in_config_is_rejected() {
    let config: ThemeConfig =
        serde_json::from_str(r#"{ "high_contrast": { "background": "not-a-color" } }"#).unwrap();
    let err = Theme::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Color(ColorError::UnknownName { .. })), "{err:?}");
}

#[test]
fn font_weight_out_of_range_is_rejected() {
    let result: Result<Typography, _> = serde_json::from_str(r#"{ "font_weight": 1200 }"#);
    assert!(result.is_err());
}

#[test]
fn keys_serialize_in_css_case() {
    assert_eq!(serde_json::to_string(&ThemeMode::HighContrast).unwrap(), r#""high-contrast""#);
    assert_eq!(serde_json::to_string(&ComponentState::Pressed).unwrap(), r#""pressed""#);
    assert_eq!(
        serde_json::to_string(&TextDecoration::LineThrough).unwrap(),
        r#""line-through""#
    );
    assert_eq!(serde_json::to_string(&LengthValue::rem(1.5)).unwrap(), r#"{"rem":1.5}"#);
}

#[test]
fn config_round_trips() {
    let config = ThemeConfig {
        light: PaletteConfig {
            border: Some("#FF0000".into()),
            ..Default::default()
        },
        spacing: Some(Spacing::default().margin(EdgeValues::zero())),
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: ThemeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

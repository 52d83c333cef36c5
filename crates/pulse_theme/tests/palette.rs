use pulse_theme::{ChartColorToken, ChartPalette, ColorScheme, HexColor, ThemeState};

#[test]
fn light_and_dark_text_contrast_differs() {
    let light = ChartPalette::for_scheme(ColorScheme::Light);
    let dark = ChartPalette::for_scheme(ColorScheme::Dark);
    assert_ne!(
        light.get(ChartColorToken::Text),
        dark.get(ChartColorToken::Text)
    );
    assert_ne!(
        light.get(ChartColorToken::TooltipBackground),
        dark.get(ChartColorToken::TooltipBackground)
    );
}

#[test]
fn inactive_is_partially_transparent_in_both_schemes() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let inactive = ChartPalette::for_scheme(scheme).inactive;
        assert!(inactive.a > 0.0 && inactive.a < 1.0, "{scheme:?}");
    }
}

#[test]
fn global_state_is_shared() {
    ThemeState::init(ColorScheme::Dark);
    let a = ThemeState::global() as *const ThemeState;
    let b = ThemeState::global() as *const ThemeState;
    assert_eq!(a, b);
}

#[test]
fn scheme_and_hex_color_deserialize() {
    #[derive(serde::Deserialize)]
    struct Cfg {
        scheme: ColorScheme,
        color: HexColor,
    }

    let cfg: Cfg = toml::from_str("scheme = \"light\"\ncolor = \"#3366ff\"").unwrap();
    assert_eq!(cfg.scheme, ColorScheme::Light);
    assert_eq!(cfg.color.0.to_rgba8(), [0x33, 0x66, 0xff, 0xff]);

    let bad: Result<Cfg, _> = serde_json::from_str(r#"{"scheme":"dark","color":"nope"}"#);
    assert!(bad.is_err());
}

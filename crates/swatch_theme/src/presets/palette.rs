//! Default palette tables
//!
//! Scales below are written for light mode. Dark mode mirrors every scale
//! across the ramp (100 <-> 1200, 150 <-> 1100, ...) and swaps the page
//! foundation to black.

use crate::tokens::*;
use crate::tokens::ColorRole::*;

/// Roles that get a full surface/text/icon/border group
const STATUS_ROLES: [ColorRole; 6] = [Primary, Secondary, Error, Success, Information, Warning];

/// Builds palette tokens for one mode
#[derive(Clone, Copy)]
struct Painter {
    mode: Mode,
}

impl Painter {
    fn scale(self, light: u16) -> u16 {
        match self.mode {
            Mode::Light => light,
            Mode::Dark => SCALE_STEPS
                .iter()
                .position(|step| *step == light)
                .map(|index| SCALE_STEPS[SCALE_STEPS.len() - 1 - index])
                .unwrap_or(light),
        }
    }

    fn role(self, role: ColorRole, light: u16) -> ColorValue {
        ColorValue::role(role, self.scale(light))
    }

    fn white(self) -> ColorValue {
        ColorValue::foundation(Foundation::White)
    }

    fn page(self) -> ColorValue {
        match self.mode {
            Mode::Light => ColorValue::foundation(Foundation::White),
            Mode::Dark => ColorValue::foundation(Foundation::Black),
        }
    }
}

fn group<const N: usize>(entries: [(&str, ColorValue); N]) -> TokenGroup {
    entries
        .into_iter()
        .map(|(variant, value)| (variant.to_string(), value))
        .collect()
}

pub(super) fn palette(mode: Mode) -> Palette {
    let painter = Painter { mode };
    Palette {
        surface: surface(painter),
        text: text(painter),
        icon: icon(painter),
        border: border(painter),
    }
}

fn surface(p: Painter) -> PaletteSection {
    let mut section = PaletteSection::new();
    for role in STATUS_ROLES {
        let mut tokens = group([
            ("default", p.role(role, 500)),
            ("defaultHover", p.role(role, 600)),
            ("defaultSubtle", p.role(role, 100)),
            ("defaultSubtleHover", p.role(role, 150)),
        ]);
        if role == Primary {
            tokens.insert("defaultSubtleHoverAlt".into(), p.role(role, 200));
        }
        section.insert(role.name().to_string(), tokens);
    }

    section.insert(
        "disabled".into(),
        group([("default", p.role(NeutralLight, 200))]),
    );
    section.insert("default".into(), group([("default", p.page())]));
    section.insert("page".into(), group([("default", p.page())]));
    section.insert(
        "pageAlternative".into(),
        group([("default", p.role(NeutralLight, 100))]),
    );
    section.insert(
        "alternative".into(),
        group([("default", p.role(NeutralDark, 900))]),
    );

    reorder(
        section,
        &[
            "primary",
            "secondary",
            "disabled",
            "error",
            "success",
            "information",
            "warning",
            "default",
            "page",
            "pageAlternative",
            "alternative",
        ],
    )
}

fn on_color_group(p: Painter, role: ColorRole) -> TokenGroup {
    group([
        ("onColor", p.white()),
        ("onColorHover", p.white()),
        ("onColorSubtle", p.role(role, 700)),
        ("onColorSubtleHover", p.role(role, 800)),
        ("default", p.role(role, 600)),
        ("defaultHover", p.role(role, 700)),
    ])
}

fn text(p: Painter) -> PaletteSection {
    let mut section = PaletteSection::new();
    for role in STATUS_ROLES {
        section.insert(role.name().to_string(), on_color_group(p, role));
    }
    section.insert(
        "disabled".into(),
        group([
            ("default", p.role(NeutralLight, 500)),
            ("onColor", p.role(NeutralLight, 300)),
        ]),
    );
    section.insert(
        "default".into(),
        group([
            ("body", p.role(NeutralDark, 800)),
            ("hero", p.role(NeutralDark, 1100)),
            ("heading", p.role(NeutralDark, 1000)),
            ("caption", p.role(NeutralDark, 600)),
            ("placeholder", p.role(NeutralLight, 500)),
        ]),
    );
    section.insert(
        "onColor".into(),
        group([
            ("hero", p.white()),
            ("heading", p.white()),
            ("body", p.white()),
            ("caption", p.role(NeutralLight, 200)),
            ("placeholder", p.role(NeutralLight, 300)),
        ]),
    );
    section.insert("accent".into(), on_color_group(p, Accent));

    reorder(
        section,
        &[
            "primary",
            "secondary",
            "disabled",
            "error",
            "success",
            "information",
            "warning",
            "default",
            "onColor",
            "accent",
        ],
    )
}

fn icon(p: Painter) -> PaletteSection {
    let mut section = PaletteSection::new();
    for role in STATUS_ROLES {
        let mut tokens = on_color_group(p, role);
        if role == Primary {
            tokens.insert("defaultSubtle".into(), p.role(role, 300));
            tokens.insert("defaultSubtleHover".into(), p.role(role, 400));
        }
        section.insert(role.name().to_string(), tokens);
    }
    section.insert(
        "disabled".into(),
        group([
            ("default", p.role(NeutralLight, 500)),
            ("onColor", p.role(NeutralLight, 300)),
        ]),
    );

    reorder(
        section,
        &[
            "primary",
            "secondary",
            "disabled",
            "error",
            "success",
            "information",
            "warning",
        ],
    )
}

fn border(p: Painter) -> PaletteSection {
    let mut section = PaletteSection::new();
    for role in STATUS_ROLES {
        section.insert(
            role.name().to_string(),
            group([
                ("default", p.role(role, 500)),
                ("defaultHover", p.role(role, 600)),
                ("defaultSubtle", p.role(role, 200)),
                ("defaultSubtleHover", p.role(role, 300)),
                ("focus", p.role(role, 400)),
            ]),
        );
    }
    section.insert(
        "disabled".into(),
        group([
            ("default", p.role(NeutralLight, 300)),
            ("onColor", p.role(NeutralLight, 200)),
        ]),
    );
    section.insert(
        "default".into(),
        group([
            ("default", p.role(NeutralLight, 300)),
            ("onColor", p.white()),
        ]),
    );

    reorder(
        section,
        &[
            "primary",
            "error",
            "success",
            "information",
            "warning",
            "secondary",
            "disabled",
            "default",
        ],
    )
}

/// Put groups into catalogue order; unlisted groups keep their place at the end
fn reorder(mut section: PaletteSection, order: &[&str]) -> PaletteSection {
    let mut ordered = PaletteSection::with_capacity(section.len());
    for name in order {
        if let Some(tokens) = section.shift_remove(*name) {
            ordered.insert((*name).to_string(), tokens);
        }
    }
    ordered.extend(section);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_mirrors_scales() {
        let dark = Painter { mode: Mode::Dark };
        assert_eq!(dark.scale(100), 1200);
        assert_eq!(dark.scale(150), 1100);
        assert_eq!(dark.scale(500), 700);
        assert_eq!(dark.scale(700), 500);
        assert_eq!(dark.scale(1200), 100);

        let light = Painter { mode: Mode::Light };
        assert_eq!(light.scale(500), 500);
    }

    #[test]
    fn sections_follow_catalogue_order() {
        let palette = palette(Mode::Light);
        let groups: Vec<&str> = palette.border.keys().map(String::as_str).collect();
        assert_eq!(
            groups,
            vec![
                "primary",
                "error",
                "success",
                "information",
                "warning",
                "secondary",
                "disabled",
                "default"
            ]
        );
        assert_eq!(palette.surface.len(), 11);
        assert_eq!(palette.text.len(), 10);
        assert_eq!(palette.icon.len(), 7);
    }

    #[test]
    fn page_switches_foundation_by_mode() {
        assert_eq!(
            palette(Mode::Light).token(Section::Surface, "page", "default"),
            Some(&ColorValue::foundation(Foundation::White))
        );
        assert_eq!(
            palette(Mode::Dark).token(Section::Surface, "page", "default"),
            Some(&ColorValue::foundation(Foundation::Black))
        );
    }

    #[test]
    fn foundation_tokens_carry_no_scale() {
        for mode in Mode::ALL {
            for (_, _, _, value) in palette(mode).tokens() {
                if Foundation::parse(&value.color).is_some() {
                    assert_eq!(value.scale, None);
                } else {
                    assert!(value.scale.is_some_and(is_scale_step));
                }
            }
        }
    }
}

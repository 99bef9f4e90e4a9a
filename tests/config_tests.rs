// Host-side tests for device profiles, driver configuration and waypoint tables.

mod common;

use common::scene_core::*;
use glam::Vec3;

fn caps(width: f64) -> DeviceCapabilities {
    DeviceCapabilities {
        viewport_width: width,
        ..Default::default()
    }
}

fn waypoint(id: SectionId, distance: f32) -> Waypoint {
    Waypoint {
        id,
        camera_distance: distance,
        field_of_view: 60.0,
        background_color: Vec3::splat(0.1),
        accent_color: Vec3::new(0.2, 0.6, 0.9),
        ambient_intensity: 0.8,
    }
}

#[test]
fn profile_follows_viewport_width() {
    assert_eq!(DeviceProfile::detect(&caps(1440.0)), DeviceProfile::Desktop);
    assert_eq!(DeviceProfile::detect(&caps(768.0)), DeviceProfile::Desktop);
    assert_eq!(DeviceProfile::detect(&caps(767.0)), DeviceProfile::Mobile);
    assert_eq!(DeviceProfile::detect(&caps(375.0)), DeviceProfile::Mobile);
    // unknown width keeps the full experience
    assert_eq!(DeviceProfile::detect(&caps(0.0)), DeviceProfile::Desktop);
}

#[test]
fn reduced_motion_or_hint_selects_low_power() {
    let reduced = DeviceCapabilities {
        prefers_reduced_motion: true,
        ..caps(1440.0)
    };
    let hinted = DeviceCapabilities {
        low_power_hint: true,
        ..caps(375.0)
    };
    assert_eq!(DeviceProfile::detect(&reduced), DeviceProfile::LowPower);
    assert_eq!(DeviceProfile::detect(&hinted), DeviceProfile::LowPower);
}

#[test]
fn profiles_map_to_driver_settings() {
    let desktop = DriverConfig::for_profile(DeviceProfile::Desktop);
    assert_eq!(desktop, DriverConfig::default());
    assert_eq!(desktop.waypoints, WaypointTable::desktop());
    assert_eq!(desktop.sample_mode, SampleMode::EveryFrame);
    assert_eq!(
        desktop.resolve_strategy,
        ResolveStrategy::Boundaries {
            threshold_px: SECTION_ACTIVATION_OFFSET_PX
        }
    );
    assert!(desktop.parallax.is_some());

    let mobile = DriverConfig::for_profile(DeviceProfile::Mobile);
    assert_eq!(mobile.waypoints, WaypointTable::mobile());

    let low = DriverConfig::for_profile(DeviceProfile::LowPower);
    assert_eq!(low.sample_mode, SampleMode::OnScroll);
    assert_eq!(low.resolve_strategy, ResolveStrategy::Progress);
    assert_eq!(low.rates, EasingRates::snappy());
    assert!(low.parallax.is_none());
}

#[test]
fn with_rates_validates() {
    let cfg = DriverConfig::default();
    assert!(cfg.clone().with_rates(EasingRates::snappy()).is_ok());
    let bad = EasingRates {
        distance: 2.0,
        ..EasingRates::smooth()
    };
    assert!(cfg.with_rates(bad).is_err());
}

#[test]
fn mobile_table_zooms_in_monotonically() {
    let table = WaypointTable::mobile();
    let d: Vec<f32> = table.iter().map(|w| w.camera_distance).collect();
    assert!(d.windows(2).all(|p| p[1] < p[0]));
}

#[test]
fn presets_cover_all_sections_in_order() {
    for table in [WaypointTable::desktop(), WaypointTable::mobile()] {
        assert_eq!(table.ids().collect::<Vec<_>>(), SectionId::ALL.to_vec());
        assert_eq!(table.first().ambient_intensity, 0.5);
        assert!(table.iter().skip(1).all(|w| w.ambient_intensity == 0.8));
    }
}

#[test]
fn presets_pass_validation() {
    for table in [WaypointTable::desktop(), WaypointTable::mobile()] {
        let rebuilt = WaypointTable::new(table.iter().copied().collect());
        assert_eq!(rebuilt.as_ref(), Ok(&table));
    }
}

#[test]
fn table_rejects_fewer_than_two_waypoints() {
    assert_eq!(
        WaypointTable::new(vec![waypoint(SectionId::Home, 5.0)]),
        Err(WaypointError::TooFewWaypoints(1))
    );
    assert_eq!(
        WaypointTable::new(Vec::new()),
        Err(WaypointError::TooFewWaypoints(0))
    );
}

#[test]
fn table_rejects_out_of_order_sections() {
    let result = WaypointTable::new(vec![
        waypoint(SectionId::About, 5.0),
        waypoint(SectionId::Home, 4.0),
    ]);
    assert_eq!(result, Err(WaypointError::OutOfOrder { id: SectionId::Home }));

    let duplicate = WaypointTable::new(vec![
        waypoint(SectionId::Home, 5.0),
        waypoint(SectionId::Home, 4.0),
    ]);
    assert!(duplicate.is_err());
}

#[test]
fn table_rejects_invalid_fields() {
    let mut bad_distance = waypoint(SectionId::About, 0.0);
    let ok = waypoint(SectionId::Home, 5.0);
    assert_eq!(
        WaypointTable::new(vec![ok, bad_distance]),
        Err(WaypointError::InvalidDistance {
            id: SectionId::About,
            value: 0.0
        })
    );
    bad_distance.camera_distance = f32::NAN;
    assert!(WaypointTable::new(vec![ok, bad_distance]).is_err());

    let bad_fov = Waypoint {
        field_of_view: -10.0,
        ..waypoint(SectionId::About, 3.0)
    };
    assert!(matches!(
        WaypointTable::new(vec![ok, bad_fov]),
        Err(WaypointError::InvalidFieldOfView { .. })
    ));

    let bad_color = Waypoint {
        accent_color: Vec3::new(1.2, 0.0, 0.0),
        ..waypoint(SectionId::About, 3.0)
    };
    assert_eq!(
        WaypointTable::new(vec![ok, bad_color]),
        Err(WaypointError::InvalidColor { id: SectionId::About })
    );

    let bad_ambient = Waypoint {
        ambient_intensity: -0.1,
        ..waypoint(SectionId::About, 3.0)
    };
    assert!(WaypointTable::new(vec![ok, bad_ambient]).is_err());
}

#[test]
fn section_ids_parse_from_dom_ids() {
    for id in SectionId::ALL {
        assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        assert_eq!(SectionId::from_index(id.index()), Some(id));
    }
    assert_eq!(
        "blog".parse::<SectionId>(),
        Err(WaypointError::UnknownSection("blog".to_owned()))
    );
    assert_eq!(SectionId::from_index(4), None);
    assert_eq!(
        WaypointError::TooFewWaypoints(1).to_string(),
        "waypoint table needs at least 2 entries, got 1"
    );
}

#[test]
fn section_tint_eases_toward_palette_colour() {
    let palette = SectionPalette::sphere();
    let mut tint = SectionTint::new(palette, SectionId::Home, SECTION_TINT_ALPHA).unwrap();
    assert_eq!(tint.current(), palette.color(SectionId::Home));
    for _ in 0..400 {
        tint.step(SectionId::Contact);
    }
    let gap = (tint.current() - palette.color(SectionId::Contact)).abs().max_element();
    assert!(gap < 1e-4);
    assert_eq!(rgb_hex(0x9b59b6), palette.color(SectionId::Contact));
}

#[test]
fn section_tint_rejects_out_of_range_alpha() {
    let palette = SectionPalette::particles();
    for alpha in [0.0, -0.5, 1.5, f32::NAN] {
        assert!(matches!(
            SectionTint::new(palette, SectionId::Home, alpha),
            Err(EasingError::OutOfRange {
                field: "section_tint",
                ..
            })
        ));
    }
    let mut snap = SectionTint::new(palette, SectionId::Home, 1.0).unwrap();
    assert_eq!(snap.step(SectionId::Projects), palette.color(SectionId::Projects));
}

use flipdial_core::error::FlipdialError;
use flipdial_core::settings::TransformSettings;
use flipdial_core::transform::{MirrorFlags, RotationAngle};

#[test]
fn test_default_settings() {
    let s = TransformSettings::default();
    assert_eq!(s.angle, RotationAngle::ZERO);
    assert!(s.mirror.is_empty());
}

#[test]
fn test_settings_toml_round_trip() {
    let s = TransformSettings {
        angle: RotationAngle::new(135),
        mirror: MirrorFlags::new(true, false),
    };
    let text = s.to_toml_string().unwrap();
    assert!(text.contains("angle = 135"), "got: {text}");
    assert_eq!(TransformSettings::from_toml_str(&text).unwrap(), s);
}

#[test]
fn test_settings_missing_fields_default() {
    let s = TransformSettings::from_toml_str("angle = 30\n").unwrap();
    assert_eq!(s.angle, RotationAngle::new(30));
    assert_eq!(s.mirror, MirrorFlags::NONE);

    let s = TransformSettings::from_toml_str("[mirror]\nvertical = true\n").unwrap();
    assert_eq!(s.angle, RotationAngle::ZERO);
    assert_eq!(s.mirror, MirrorFlags::new(false, true));
}

#[test]
fn test_settings_angle_clamped() {
    let s = TransformSettings::from_toml_str("angle = 720\n").unwrap();
    assert_eq!(s.angle.degrees(), 360);

    let s = TransformSettings::from_toml_str("angle = -10\n").unwrap();
    assert_eq!(s.angle.degrees(), 0);

    let s = TransformSettings::from_toml_str("angle = 70000\n").unwrap();
    assert_eq!(s.angle.degrees(), 360);
}

#[test]
fn test_settings_rejects_garbage() {
    let err = TransformSettings::from_toml_str("angle = \"left\"").unwrap_err();
    assert!(matches!(err, FlipdialError::Settings(_)));
}

#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let s = TransformSettings {
        angle: RotationAngle::new(270),
        mirror: MirrorFlags::new(true, true),
    };
    s.save(&path).unwrap();
    assert_eq!(TransformSettings::load(&path).unwrap(), s);
}

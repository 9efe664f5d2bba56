#![cfg(feature = "serde")]

use geowarp_image::ImageSize;
use geowarp_imgproc::warp::{build_matrix, compose, ReflectionAxis, TransformKind};

#[test]
fn deserialize_tagged() -> Result<(), serde_json::Error> {
    let kinds: Vec<TransformKind> = serde_json::from_str(
        r#"[
            {"kind": "translation", "dx": 10, "dy": -5},
            {"kind": "rotation", "angle_degrees": 30},
            {"kind": "rotation", "angle_degrees": 30, "center": [1, 2]},
            {"kind": "reflection", "axis": "diagonal"}
        ]"#,
    )?;

    assert_eq!(
        kinds,
        vec![
            TransformKind::Translation { dx: 10.0, dy: -5.0 },
            TransformKind::Rotation {
                angle_degrees: 30.0,
                center: None
            },
            TransformKind::Rotation {
                angle_degrees: 30.0,
                center: Some((1.0, 2.0))
            },
            TransformKind::Reflection {
                axis: ReflectionAxis::Diagonal
            },
        ]
    );
    Ok(())
}

#[test]
fn serialize_round_trip() -> Result<(), serde_json::Error> {
    let kind = TransformKind::Shear { shx: 0.5, shy: 0.0 };
    let json = serde_json::to_string(&kind)?;
    assert_eq!(json, r#"{"kind":"shear","shx":0.5,"shy":0.0}"#);
    assert_eq!(serde_json::from_str::<TransformKind>(&json)?, kind);
    Ok(())
}

#[test]
fn unknown_kind_is_rejected() {
    let res = serde_json::from_str::<TransformKind>(r#"{"kind": "perspective"}"#);
    assert!(res.is_err());

    let res = serde_json::from_str::<TransformKind>(r#"{"kind": "scaling", "sx": 2}"#);
    assert!(res.is_err());
}

#[test]
fn config_chain_composes() -> Result<(), Box<dyn std::error::Error>> {
    let kinds: Vec<TransformKind> = serde_json::from_str(
        r#"[
            {"kind": "translation", "dx": 2, "dy": 0},
            {"kind": "scaling", "sx": 3, "sy": 1}
        ]"#,
    )?;
    let size = ImageSize {
        width: 10,
        height: 10,
    };
    let matrices = kinds
        .iter()
        .map(|kind| build_matrix(kind, size))
        .collect::<Result<Vec<_>, _>>()?;

    // translate first, then scale
    assert_eq!(compose(&matrices).transform_point(1.0, 1.0), (9.0, 1.0));
    Ok(())
}
